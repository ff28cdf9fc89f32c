//! Waitlist Backend Integration
//!
//! Abstraction over the service of record that stores signups.

mod http;
mod simulated;

pub use http::HttpBackend;
pub use simulated::{DEFAULT_SIMULATED_DELAY, SimulatedBackend};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Backend confirmation that a signup was received
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    /// Name of the backend that acknowledged
    pub backend: String,

    /// When the acknowledgment was received
    pub received_at: DateTime<Utc>,
}

impl Acknowledgement {
    pub fn now(backend: impl Into<String>) -> Self {
        Self {
            backend: backend.into(),
            received_at: Utc::now(),
        }
    }
}

/// Waitlist backend trait (Strategy pattern)
///
/// Implementations must answer within a bounded time and treat a repeated
/// submission of the same address as success.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait WaitlistBackend: Send + Sync {
    /// Add `email` to the waitlist
    async fn join(&self, email: &str) -> Result<Acknowledgement>;

    /// Backend name
    fn name(&self) -> &str;
}
