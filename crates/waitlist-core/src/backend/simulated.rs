//! Simulated Backend
//!
//! Stands in for the real signup service: waits a fixed delay, then
//! acknowledges. It never fails.

use std::time::Duration;

use async_trait::async_trait;

use super::{Acknowledgement, WaitlistBackend};
use crate::error::Result;
use crate::timer;

/// Default round-trip the simulation pretends to take
pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(400);

/// Fixed-delay backend with no side effects
#[derive(Clone, Debug)]
pub struct SimulatedBackend {
    delay: Duration,
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedBackend {
    pub const fn new() -> Self {
        Self {
            delay: DEFAULT_SIMULATED_DELAY,
        }
    }

    pub const fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl WaitlistBackend for SimulatedBackend {
    async fn join(&self, email: &str) -> Result<Acknowledgement> {
        tracing::debug!(delay = ?self.delay, "simulating waitlist round trip");
        timer::sleep(self.delay).await;
        tracing::debug!(email_len = email.len(), "simulated acknowledgment");
        Ok(Acknowledgement::now(self.name()))
    }

    fn name(&self) -> &str {
        "Simulated"
    }
}
