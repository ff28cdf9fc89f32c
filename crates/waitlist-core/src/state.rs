//! Form State
//!
//! What the display surface renders for one waitlist form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::WaitlistError;
use crate::honeypot::is_likely_automated;

/// Progress text shown while a submission is in flight
pub const SUBMITTING_MESSAGE: &str = "Saving…";

/// Confirmation shown once the backend acknowledged the signup
pub const SUCCESS_MESSAGE: &str = "You're on the list. We'll reach out with your invite.";

/// Unique identifier of an accepted submission attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttemptId(Uuid);

impl AttemptId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AttemptId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AttemptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Values the form hands to the controller on submit
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAttempt {
    pub email: String,
    pub honeypot: String,
}

impl SubmissionAttempt {
    pub fn new(email: impl Into<String>, honeypot: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            honeypot: honeypot.into(),
        }
    }

    pub fn is_likely_automated(&self) -> bool {
        is_likely_automated(&self.honeypot)
    }
}

/// Status of the waitlist form
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    /// Succeeded and Failed end an attempt; the form accepts a new one afterwards
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }

    /// CSS modifier for the status line
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot published to the display surface after every transition
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub status: SubmissionStatus,

    /// Rendered verbatim whenever `status` is not Idle
    pub message: String,

    /// Latest accepted attempt
    pub attempt: Option<AttemptId>,

    /// Email of the latest accepted attempt
    pub email: Option<String>,

    /// When the latest accepted attempt started
    pub started_at: Option<DateTime<Utc>>,

    /// Why the latest attempt failed
    pub failure: Option<WaitlistError>,
}

impl FormState {
    /// Enter Submitting for a fresh attempt
    pub(crate) fn begin(&mut self, id: AttemptId, email: &str) {
        self.status = SubmissionStatus::Submitting;
        self.message = SUBMITTING_MESSAGE.into();
        self.attempt = Some(id);
        self.email = Some(email.to_owned());
        self.started_at = Some(Utc::now());
        self.failure = None;
    }

    pub(crate) fn succeed(&mut self) {
        self.status = SubmissionStatus::Succeeded;
        self.message = SUCCESS_MESSAGE.into();
        self.failure = None;
    }

    pub(crate) fn fail(&mut self, error: WaitlistError) {
        self.status = SubmissionStatus::Failed;
        self.message = error.user_message();
        self.failure = Some(error);
    }

    /// Whether `id` is the attempt currently in flight
    pub fn is_in_flight(&self, id: AttemptId) -> bool {
        self.status == SubmissionStatus::Submitting && self.attempt == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GENERIC_FAILURE_MESSAGE;

    #[test]
    fn test_default_is_idle_and_silent() {
        let state = FormState::default();
        assert_eq!(state.status, SubmissionStatus::Idle);
        assert!(state.message.is_empty());
        assert!(state.attempt.is_none());
    }

    #[test]
    fn test_begin_then_fail_then_begin_clears_failure() {
        let mut state = FormState::default();
        let first = AttemptId::new();
        state.begin(first, "a@example.com");
        assert!(state.is_in_flight(first));

        state.fail(WaitlistError::Network("down".into()));
        assert_eq!(state.status, SubmissionStatus::Failed);
        assert_eq!(state.message, GENERIC_FAILURE_MESSAGE);
        assert!(!state.is_in_flight(first));

        let second = AttemptId::new();
        state.begin(second, "b@example.com");
        assert_eq!(state.message, SUBMITTING_MESSAGE);
        assert_eq!(state.email.as_deref(), Some("b@example.com"));
        assert!(state.failure.is_none());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(SubmissionStatus::Succeeded.is_terminal());
        assert!(SubmissionStatus::Failed.is_terminal());
        assert!(!SubmissionStatus::Idle.is_terminal());
        assert!(!SubmissionStatus::Submitting.is_terminal());
    }

    #[test]
    fn test_attempt_honeypot_check() {
        assert!(!SubmissionAttempt::new("a@example.com", "").is_likely_automated());
        assert!(SubmissionAttempt::new("a@example.com", "spam").is_likely_automated());
    }
}
