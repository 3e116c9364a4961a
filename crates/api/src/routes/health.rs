//! Service banner and health check endpoints.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::AppState;

/// Banner served at `/`.
#[derive(Serialize)]
pub struct RootResponse {
    /// Service name.
    pub message: &'static str,
    /// Always `running`.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Cinetrack film production API",
        status: "running",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health check handler.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Creates banner and health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
