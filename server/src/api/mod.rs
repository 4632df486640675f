//! API Router and Application State
//!
//! Routing configuration and shared state.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::relay;
use crate::relay::transport::TableTransport;

/// Shared application state.
///
/// Immutable per process: the relay holds no mutable state across requests.
#[derive(Clone)]
pub struct AppState {
    /// Outbound table API transport
    pub transport: Arc<dyn TableTransport>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(transport: Arc<dyn TableTransport>) -> Self {
        Self { transport }
    }
}

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Inbound payment-provider notifications
        .route("/webhook", post(relay::handlers::receive_webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// GET /health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
