use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub water_step_liters: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            water_step_liters: 0.5,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let host = get("APP_HOST").unwrap_or(defaults.host);
        let port = match get("APP_PORT") {
            Some(v) => v.parse::<u16>().with_context(|| format!("APP_PORT={v}"))?,
            None => defaults.port,
        };
        let water_step_liters = match get("WATER_STEP_LITERS") {
            Some(v) => v
                .parse::<f64>()
                .with_context(|| format!("WATER_STEP_LITERS={v}"))?,
            None => defaults.water_step_liters,
        };
        anyhow::ensure!(
            water_step_liters.is_finite() && water_step_liters > 0.0,
            "WATER_STEP_LITERS must be a positive number, got {water_step_liters}"
        );
        Ok(Self {
            host,
            port,
            water_step_liters,
        })
    }
}
