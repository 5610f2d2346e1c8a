use std::sync::Arc;

use carnivore_tracker::{
    app,
    ledger::clock::{Clock, SystemClock},
    state::AppState,
};

fn main() -> anyhow::Result<()> {
    // Offset detection must happen while the process is single-threaded.
    let clock = Arc::new(SystemClock::detect()) as Arc<dyn Clock>;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(clock))
}

async fn run(clock: Arc<dyn Clock>) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "carnivore_tracker=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let app_state = AppState::init(clock)?;
    let config = app_state.config.clone();
    tracing::info!(water_step_liters = config.water_step_liters, "ledger ready");

    app::serve(app::build_app(app_state), &config).await
}
