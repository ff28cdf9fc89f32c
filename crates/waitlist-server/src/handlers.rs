//! HTTP Handlers

use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use waitlist_core::{email, is_likely_automated};

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub backend: String,
    pub uptime_secs: i64,
}

#[derive(Debug, Deserialize)]
pub struct JoinRequest {
    pub email: String,

    /// Honeypot; real forms always send it empty
    #[serde(default)]
    pub company: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JoinResponse {
    pub status: String,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        backend: state.backend.clone(),
        uptime_secs: (Utc::now() - state.started_at).num_seconds(),
    })
}

/// Waitlist signup endpoint
///
/// Bots that fill the honeypot get the same answer as people, so the
/// filter gives nothing away. Repeated signups of one address are
/// answered identically.
pub async fn join_waitlist(
    State(_state): State<AppState>,
    Json(payload): Json<JoinRequest>,
) -> Result<Json<JoinResponse>, (StatusCode, Json<ErrorResponse>)> {
    let ok = || {
        Json(JoinResponse {
            status: "ok".into(),
            received_at: Utc::now(),
        })
    };

    if is_likely_automated(&payload.company) {
        tracing::debug!("honeypot filled, acknowledging without recording");
        return Ok(ok());
    }

    let Some(address) = email::normalize(&payload.email) else {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: "Email address is not valid".into(),
                code: "INVALID_EMAIL".into(),
            }),
        ));
    };

    let domain = address.rsplit_once('@').map_or("", |(_, domain)| domain);
    tracing::info!(%domain, "waitlist signup received");
    Ok(ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, header},
    };
    use tower::ServiceExt;

    use waitlist_core::{HttpBackend, WaitlistBackend, WaitlistError};

    fn app() -> axum::Router {
        crate::router(AppState::new("Simulated"), "does-not-exist")
    }

    async fn post_join(body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let request = Request::post("/api/waitlist")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or_default())
    }

    #[tokio::test]
    async fn test_valid_signup_is_acknowledged() {
        let (status, body) = post_join(serde_json::json!({ "email": "a@example.com" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert!(body["received_at"].is_string());
    }

    #[tokio::test]
    async fn test_repeat_signup_gets_same_answer() {
        let payload = serde_json::json!({ "email": "a@example.com", "company": "" });
        let (first, _) = post_join(payload.clone()).await;
        let (second, body) = post_join(payload).await;
        assert_eq!(first, StatusCode::OK);
        assert_eq!(second, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_padded_mixed_case_signup_is_accepted() {
        let (status, body) =
            post_join(serde_json::json!({ "email": "  Jane.Doe@Example.COM " })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_invalid_email_is_unprocessable() {
        let (status, body) = post_join(serde_json::json!({ "email": "nope" })).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "INVALID_EMAIL");
    }

    #[tokio::test]
    async fn test_honeypot_looks_like_success() {
        let (status, body) =
            post_join(serde_json::json!({ "email": "nope", "company": "Acme" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::get("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["backend"], "Simulated");
    }

    #[tokio::test]
    async fn test_http_backend_against_server() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app()).await.unwrap();
        });

        let backend = HttpBackend::new(format!("http://{addr}/api/waitlist"));

        let ack = backend.join("a@example.com").await.unwrap();
        assert_eq!(ack.backend, "Http");

        let err = backend.join("not-an-email").await.unwrap_err();
        assert_eq!(err, WaitlistError::InvalidEmail("Email address is not valid".into()));
    }
}
