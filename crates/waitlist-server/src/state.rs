//! Application State

use chrono::{DateTime, Utc};

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// When the server started, reported by `/health`
    pub started_at: DateTime<Utc>,

    /// Name of the waitlist backend this deployment is configured with
    pub backend: String,
}

impl AppState {
    pub fn new(backend: impl Into<String>) -> Self {
        Self {
            started_at: Utc::now(),
            backend: backend.into(),
        }
    }
}
