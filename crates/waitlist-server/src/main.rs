//! Verifyd landing page server
//!
//! Axum server hosting the WASM landing page and the waitlist endpoint the
//! HTTP waitlist backend posts to. Signups are acknowledged and logged,
//! not stored.

mod handlers;
mod state;

use std::path::PathBuf;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use waitlist_core::WaitlistConfig;

use crate::handlers::{health_check, join_waitlist};
use crate::state::AppState;

/// Build the application router
pub fn router(state: AppState, static_dir: impl Into<PathBuf>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health & info
        .route("/health", get(health_check))
        // Waitlist API
        .route("/api/waitlist", post(join_waitlist))
        // Static files (WASM frontend)
        .fallback_service(ServeDir::new(static_dir.into()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into());
    if !std::path::Path::new(&static_dir).is_dir() {
        tracing::warn!("⚠ Static directory '{}' not found - landing page will 404", static_dir);
        tracing::warn!("  Build the frontend with `trunk build --release` and set STATIC_DIR");
    }

    let config = WaitlistConfig::from_env();
    let backend = config.backend();
    let app = router(AppState::new(backend.name()), &static_dir);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 waitlist server running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health       - Health check");
    tracing::info!("  POST /api/waitlist - Join the waitlist");
    tracing::info!("  GET  /*            - Landing page ({})", static_dir);
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
