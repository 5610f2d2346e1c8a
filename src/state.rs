use crate::config::AppConfig;
use crate::ledger::clock::Clock;
use crate::ledger::services::Ledger;
use crate::profile::dto::UserProfile;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Shared handle to the process-wide ledger.
///
/// A single mutex covers the meal list and the water counter together, so
/// read-modify-write calls from concurrent requests never interleave.
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<Mutex<Ledger>>,
    pub profile: Arc<RwLock<UserProfile>>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn init(clock: Arc<dyn Clock>) -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        Ok(Self::from_parts(config, clock))
    }

    pub fn from_parts(config: Arc<AppConfig>, clock: Arc<dyn Clock>) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(Ledger::new(clock))),
            profile: Arc::new(RwLock::new(UserProfile::default())),
            config,
        }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        use crate::ledger::clock::FixedClock;
        use time::macros::datetime;

        let clock = Arc::new(FixedClock(datetime!(2024-01-15 08:30:00 UTC))) as Arc<dyn Clock>;
        Self::from_parts(Arc::new(AppConfig::default()), clock)
    }
}
