//! # waitlist-core
//!
//! Email-capture flow behind the landing page's waitlist forms.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    WaitlistController                        │
//! │  ┌─────────────┐  ┌──────────────┐  ┌─────────────────────┐  │
//! │  │  Honeypot   │  │  FormState   │  │  WaitlistBackend    │  │
//! │  │   filter    │──│ (watch chan) │──│   (Strategy)        │  │
//! │  └─────────────┘  └──────────────┘  └─────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//!                 Idle → Submitting → Succeeded | Failed
//! ```
//!
//! The `WaitlistBackend` trait is the seam for the real signup service:
//! `SimulatedBackend` acknowledges after a fixed delay, `HttpBackend` posts
//! to a remote endpoint. The controller never sees the difference.

pub mod backend;
pub mod config;
pub mod controller;
pub mod email;
pub mod error;
pub mod honeypot;
pub mod state;
pub mod timer;

pub use backend::{Acknowledgement, HttpBackend, SimulatedBackend, WaitlistBackend};
pub use config::WaitlistConfig;
pub use controller::{ControllerOptions, IgnoreReason, SubmitOutcome, WaitlistController};
pub use email::looks_like_email;
pub use error::{Result, WaitlistError};
pub use honeypot::is_likely_automated;
pub use state::{AttemptId, FormState, SubmissionAttempt, SubmissionStatus};
