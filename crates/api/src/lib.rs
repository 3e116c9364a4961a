//! HTTP API layer with Axum routes and extractors.
//!
//! This crate provides:
//! - REST API routes for projects, budgets, purchase orders, invoices,
//!   schedules, crew, KPI reports, events and AI analysis
//! - The bearer-token extractor behind `/auth/me`
//! - Error-to-response mapping

pub mod error;
pub mod middleware;
pub mod routes;

use axum::{Router, http::header::AUTHORIZATION};
use cinetrack_ai::NarrativeService;
use cinetrack_shared::JwtService;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ApiResult};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// JWT service for token operations.
    pub jwt_service: Arc<JwtService>,
    /// Narrative analysis service.
    pub narrative: Arc<NarrativeService>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    routes::api_routes()
        .layer(TraceLayer::new_for_http())
        .layer(SetSensitiveRequestHeadersLayer::new(std::iter::once(
            AUTHORIZATION,
        )))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
