use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::dto::{HealthReport, HealthScoreRequest, UserProfile};
use super::services::{health_report, validate_profile};
use crate::state::AppState;

pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile).put(update_profile))
        .route("/health-score", post(health_score))
}

#[instrument(skip(state))]
pub async fn get_profile(State(state): State<AppState>) -> Json<UserProfile> {
    Json(state.profile.read().await.clone())
}

#[instrument(skip(state))]
pub async fn update_profile(
    State(state): State<AppState>,
    Json(payload): Json<UserProfile>,
) -> Result<Json<UserProfile>, (StatusCode, String)> {
    if let Err(e) = validate_profile(&payload) {
        warn!(error = %e, "profile rejected");
        return Err(e.into());
    }
    *state.profile.write().await = payload.clone();
    info!(activity = ?payload.activity_level, goal = ?payload.goal, "profile updated");
    Ok(Json(payload))
}

#[instrument(skip(state))]
pub async fn health_score(
    State(state): State<AppState>,
    Json(req): Json<HealthScoreRequest>,
) -> Result<Json<HealthReport>, (StatusCode, String)> {
    let profile = state.profile.read().await.clone();
    let water = state.ledger.lock().await.water_liters();
    health_report(&profile, water, req.sleep_hours, req.steps)
        .map(Json)
        .map_err(|e| {
            warn!(error = %e, "health score rejected");
            e.into()
        })
}
