//! Waitlist Configuration
//!
//! Picks the backend and its timing. Native builds read the process
//! environment at startup; the browser build bakes the same variables in at
//! compile time.

use std::sync::Arc;
use std::time::Duration;

use crate::backend::{DEFAULT_SIMULATED_DELAY, HttpBackend, SimulatedBackend, WaitlistBackend};
use crate::controller::{ControllerOptions, DEFAULT_TIMEOUT};

/// Waitlist configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaitlistConfig {
    /// Remote waitlist endpoint; `None` keeps the simulated backend
    pub endpoint: Option<String>,

    /// Delay used by the simulated backend
    pub simulated_delay: Duration,

    /// Upper bound on a single backend call
    pub timeout: Duration,
}

impl Default for WaitlistConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            simulated_delay: DEFAULT_SIMULATED_DELAY,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl WaitlistConfig {
    /// Read `WAITLIST_ENDPOINT`, `WAITLIST_SIMULATED_DELAY_MS` and
    /// `WAITLIST_TIMEOUT_SECS` from the environment
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("WAITLIST_ENDPOINT").ok().as_deref(),
            std::env::var("WAITLIST_SIMULATED_DELAY_MS").ok().as_deref(),
            std::env::var("WAITLIST_TIMEOUT_SECS").ok().as_deref(),
        )
    }

    /// Same variables, captured when the crate was compiled
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("WAITLIST_ENDPOINT"),
            option_env!("WAITLIST_SIMULATED_DELAY_MS"),
            option_env!("WAITLIST_TIMEOUT_SECS"),
        )
    }

    fn from_values(endpoint: Option<&str>, delay_ms: Option<&str>, timeout_secs: Option<&str>) -> Self {
        let defaults = Self::default();

        let endpoint = endpoint
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(String::from);
        let simulated_delay = delay_ms
            .and_then(|ms| ms.trim().parse().ok())
            .map_or(defaults.simulated_delay, Duration::from_millis);
        let timeout = timeout_secs
            .and_then(|secs| secs.trim().parse().ok())
            .filter(|secs: &u64| *secs > 0)
            .map_or(defaults.timeout, Duration::from_secs);

        Self {
            endpoint,
            simulated_delay,
            timeout,
        }
    }

    /// Build the backend this configuration selects
    pub fn backend(&self) -> Arc<dyn WaitlistBackend> {
        match &self.endpoint {
            Some(endpoint) => {
                tracing::info!(%endpoint, "using HTTP waitlist backend");
                Arc::new(HttpBackend::new(endpoint.clone()))
            }
            None => {
                tracing::info!(
                    delay = ?self.simulated_delay,
                    "using simulated waitlist backend"
                );
                Arc::new(SimulatedBackend::with_delay(self.simulated_delay))
            }
        }
    }

    pub const fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            timeout: self.timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_simulated_400ms() {
        let config = WaitlistConfig::from_values(None, None, None);
        assert_eq!(config, WaitlistConfig::default());
        assert_eq!(config.simulated_delay, Duration::from_millis(400));
        assert_eq!(config.backend().name(), "Simulated");
    }

    #[test]
    fn test_endpoint_selects_http_backend() {
        let config = WaitlistConfig::from_values(Some(" https://example.com/api/waitlist "), None, None);
        assert_eq!(config.endpoint.as_deref(), Some("https://example.com/api/waitlist"));
        assert_eq!(config.backend().name(), "Http");
    }

    #[test]
    fn test_blank_and_garbage_values_fall_back() {
        let config = WaitlistConfig::from_values(Some("  "), Some("soon"), Some("0"));
        assert_eq!(config, WaitlistConfig::default());
    }

    #[test]
    fn test_numeric_overrides() {
        let config = WaitlistConfig::from_values(None, Some("25"), Some("3"));
        assert_eq!(config.simulated_delay, Duration::from_millis(25));
        assert_eq!(config.controller_options().timeout, Duration::from_secs(3));
    }
}
