//! Waitlist Form Controller
//!
//! Owns one form's [`FormState`] and drives it through
//! `Idle → Submitting → Succeeded | Failed`. A finished attempt does not
//! need a reset: the next accepted `submit` goes straight back to
//! Submitting.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use waitlist_core::{SubmissionStatus, WaitlistController};
//!
//! let controller = WaitlistController::simulated();
//! let mut updates = controller.subscribe();
//!
//! controller.submit("a@example.com", "").await;
//! assert_eq!(controller.status(), SubmissionStatus::Succeeded);
//! ```

use std::sync::Arc;
use std::time::Duration;

use futures::future::{AbortHandle, Abortable, Aborted};
use parking_lot::Mutex;
use tokio::sync::watch;

use crate::backend::{Acknowledgement, SimulatedBackend, WaitlistBackend};
use crate::error::WaitlistError;
use crate::state::{AttemptId, FormState, SubmissionAttempt, SubmissionStatus};
use crate::timer::{self, Elapsed};

/// Default upper bound on one backend call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Controller tuning
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Backend calls running longer than this resolve as Failed
    pub timeout: Duration,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Why a `submit` call left the state untouched
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Another attempt is still Submitting
    InFlight,

    /// The honeypot field was filled in
    LikelyAutomated,
}

/// Result of one `submit` call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Ignored(IgnoreReason),
    Succeeded(Acknowledgement),
    Failed(WaitlistError),
}

struct InFlight {
    attempt: AttemptId,
    abort: AbortHandle,
}

/// Runs when a `submit` future finishes or is dropped mid-flight
struct ReleaseOnDrop<'a> {
    controller: &'a WaitlistController,
    attempt: AttemptId,
}

impl Drop for ReleaseOnDrop<'_> {
    fn drop(&mut self) {
        self.controller.release(self.attempt);
    }
}

/// Waitlist form controller
///
/// Cheap to clone; clones share the same state and in-flight attempt.
#[derive(Clone)]
pub struct WaitlistController {
    state: Arc<watch::Sender<FormState>>,
    backend: Arc<dyn WaitlistBackend>,
    options: ControllerOptions,
    in_flight: Arc<Mutex<Option<InFlight>>>,
}

impl std::fmt::Debug for WaitlistController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaitlistController")
            .field("backend", &self.backend.name())
            .field("status", &self.status())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl WaitlistController {
    pub fn new(backend: Arc<dyn WaitlistBackend>) -> Self {
        Self::with_options(backend, ControllerOptions::default())
    }

    pub fn with_options(backend: Arc<dyn WaitlistBackend>, options: ControllerOptions) -> Self {
        Self {
            state: Arc::new(watch::Sender::new(FormState::default())),
            backend,
            options,
            in_flight: Arc::new(Mutex::new(None)),
        }
    }

    /// Controller backed by the 400 ms simulated acknowledgment
    pub fn simulated() -> Self {
        Self::new(Arc::new(SimulatedBackend::new()))
    }

    /// Current state
    pub fn snapshot(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state.borrow().status
    }

    /// Receive every state transition
    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Submit the form's current values.
    ///
    /// Returns without touching state while an attempt is in flight or
    /// when `honeypot` is non-empty. Backend failures never escape: they
    /// end up as `SubmissionStatus::Failed` and in the returned outcome.
    pub async fn submit(&self, email: &str, honeypot: &str) -> SubmitOutcome {
        self.submit_attempt(SubmissionAttempt::new(email, honeypot)).await
    }

    async fn submit_attempt(&self, attempt: SubmissionAttempt) -> SubmitOutcome {
        let id = match self.begin(&attempt) {
            Ok(id) => id,
            Err(reason) => return SubmitOutcome::Ignored(reason),
        };

        // Registered before the first await so `cancel` always finds it
        let (abort, registration) = AbortHandle::new_pair();
        *self.in_flight.lock() = Some(InFlight { attempt: id, abort });
        let _release = ReleaseOnDrop {
            controller: self,
            attempt: id,
        };

        let call = Abortable::new(self.backend.join(&attempt.email), registration);
        let result = match timer::timeout(self.options.timeout, call).await {
            Ok(Ok(result)) => result,
            Ok(Err(Aborted)) => Err(WaitlistError::Cancelled),
            Err(Elapsed) => Err(WaitlistError::Timeout(
                u64::try_from(self.options.timeout.as_millis()).unwrap_or(u64::MAX),
            )),
        };

        self.forget(id);
        self.resolve(id, result)
    }

    /// Abort the attempt in flight, if any.
    ///
    /// The aborted attempt resolves as Failed with [`WaitlistError::Cancelled`]
    /// right away, whether or not its `submit` future is still being polled.
    pub fn cancel(&self) -> bool {
        let Some(current) = self.in_flight.lock().take() else {
            return false;
        };

        tracing::info!(attempt = %current.attempt, "cancelling waitlist submission");
        current.abort.abort();
        self.abandon(current.attempt);
        true
    }

    /// `Submitting → Failed(Cancelled)` if `id` is still the attempt in flight
    fn abandon(&self, id: AttemptId) -> bool {
        self.state.send_if_modified(|state| {
            if !state.is_in_flight(id) {
                return false;
            }
            state.fail(WaitlistError::Cancelled);
            true
        })
    }

    /// Drop the abort handle of `id` unless a newer attempt replaced it
    fn forget(&self, id: AttemptId) {
        let mut slot = self.in_flight.lock();
        if slot.as_ref().is_some_and(|current| current.attempt == id) {
            *slot = None;
        }
    }

    /// Fail the attempt `id` if its future went away before resolving it
    fn release(&self, id: AttemptId) {
        self.forget(id);
        if self.abandon(id) {
            tracing::warn!(attempt = %id, "waitlist submission dropped before it resolved");
        }
    }

    /// Guard, bot filter, then `→ Submitting`
    fn begin(&self, attempt: &SubmissionAttempt) -> Result<AttemptId, IgnoreReason> {
        if self.status() == SubmissionStatus::Submitting {
            tracing::debug!("submission already in flight, ignoring");
            return Err(IgnoreReason::InFlight);
        }

        if attempt.is_likely_automated() {
            tracing::debug!("honeypot filled, dropping submission");
            return Err(IgnoreReason::LikelyAutomated);
        }

        let id = AttemptId::new();
        let accepted = self.state.send_if_modified(|state| {
            if state.status == SubmissionStatus::Submitting {
                return false;
            }
            state.begin(id, &attempt.email);
            true
        });

        if !accepted {
            return Err(IgnoreReason::InFlight);
        }

        tracing::info!(attempt = %id, backend = self.backend.name(), "waitlist submission started");
        Ok(id)
    }

    /// `Submitting → Succeeded | Failed` for the attempt `id`
    fn resolve(&self, id: AttemptId, result: crate::Result<Acknowledgement>) -> SubmitOutcome {
        let outcome = match result {
            Ok(ack) => SubmitOutcome::Succeeded(ack),
            Err(err) => SubmitOutcome::Failed(err),
        };

        let applied = self.state.send_if_modified(|state| {
            if !state.is_in_flight(id) {
                return false;
            }
            match &outcome {
                SubmitOutcome::Succeeded(_) => state.succeed(),
                SubmitOutcome::Failed(err) => state.fail(err.clone()),
                SubmitOutcome::Ignored(_) => return false,
            }
            true
        });

        match &outcome {
            _ if !applied => {
                tracing::debug!(attempt = %id, "stale waitlist attempt resolved, state untouched");
            }
            SubmitOutcome::Succeeded(ack) => {
                tracing::info!(attempt = %id, backend = %ack.backend, "waitlist submission succeeded");
            }
            SubmitOutcome::Failed(err) => {
                tracing::warn!(attempt = %id, error = %err, "waitlist submission failed");
            }
            SubmitOutcome::Ignored(_) => {}
        }

        outcome
    }
}
