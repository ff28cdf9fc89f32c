//! Error Types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for waitlist operations
pub type Result<T> = std::result::Result<T, WaitlistError>;

/// Generic retry prompt shown for failures without a more specific message
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Waitlist error types
///
/// Every variant carries owned strings only so the error can live inside
/// [`crate::FormState`] and be cloned to the display surface.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum WaitlistError {
    /// Backend refused the address as malformed
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Transport-level failure reaching the backend
    #[error("Network error: {0}")]
    Network(String),

    /// Backend did not answer within the configured bound
    #[error("Timed out after {0} ms")]
    Timeout(u64),

    /// Address is already on the list
    #[error("Email already registered")]
    Duplicate,

    /// Too many submissions
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Unexpected HTTP status from the backend
    #[error("Backend rejected submission with status {status}")]
    Rejected { status: u16 },

    /// Attempt aborted before it resolved
    #[error("Submission cancelled")]
    Cancelled,

    /// Other/unknown error
    #[error("{0}")]
    Other(String),
}

impl WaitlistError {
    /// Check if the user can reasonably retry right away
    ///
    /// `RateLimited` is excluded: the user has to wait before the next try.
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Timeout(_) | Self::Rejected { .. } | Self::Cancelled | Self::Other(_)
        )
    }

    /// Convert to the message rendered next to the form
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidEmail(_) => "That email address doesn't look right. Please check it and try again.".into(),
            Self::Duplicate => "You're already on the list. We'll reach out with your invite.".into(),
            Self::RateLimited(_) => "Too many attempts. Please wait a moment and try again.".into(),
            _ => GENERIC_FAILURE_MESSAGE.into(),
        }
    }
}

impl From<reqwest::Error> for WaitlistError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
