use axum::http::StatusCode;
use thiserror::Error;

/// Errors surfaced by the ledger and profile services.
///
/// Every variant is raised before any state is touched, so a rejected call
/// leaves the ledger exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl TrackerError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<TrackerError> for (StatusCode, String) {
    fn from(e: TrackerError) -> Self {
        (e.status(), e.to_string())
    }
}
