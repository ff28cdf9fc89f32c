//! HTTP Backend
//!
//! Posts signups as JSON to a remote waitlist endpoint and maps the reply
//! onto [`WaitlistError`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{Acknowledgement, WaitlistBackend};
use crate::error::{Result, WaitlistError};

#[derive(Debug, Serialize)]
struct JoinRequest<'a> {
    email: &'a str,
}

/// Error body returned by the waitlist endpoint
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: String,
}

/// Backend that talks to a waitlist endpoint over HTTP
#[derive(Clone, Debug)]
pub struct HttpBackend {
    endpoint: String,
}

impl HttpBackend {
    /// `endpoint` is the full URL, e.g. `https://example.com/api/waitlist`
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Map a non-success HTTP status onto the error taxonomy
fn error_for_status(status: u16, detail: String) -> WaitlistError {
    match status {
        400 | 422 => WaitlistError::InvalidEmail(detail),
        409 => WaitlistError::Duplicate,
        429 => WaitlistError::RateLimited(detail),
        _ => WaitlistError::Rejected { status },
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl WaitlistBackend for HttpBackend {
    async fn join(&self, email: &str) -> Result<Acknowledgement> {
        let client = reqwest::Client::new();

        let response = client
            .post(&self.endpoint)
            .json(&JoinRequest { email })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(endpoint = %self.endpoint, "waitlist signup acknowledged");
            return Ok(Acknowledgement::now(self.name()));
        }

        let body: ErrorBody = response.json().await.unwrap_or_default();
        tracing::warn!(
            endpoint = %self.endpoint,
            status = status.as_u16(),
            error = %body.error,
            "waitlist signup rejected"
        );
        Err(error_for_status(status.as_u16(), body.error))
    }

    fn name(&self) -> &str {
        "Http"
    }
}
