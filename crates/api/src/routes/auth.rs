//! Demo authentication routes.
//!
//! There is no user table: any non-blank credentials receive a signed token.

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get, routing::post};
use serde_json::json;
use tracing::{error, info};

use crate::{ApiError, ApiResult, AppState, middleware::AuthUser};
use cinetrack_shared::AppError;
use cinetrack_shared::auth::{LoginRequest, LoginResponse, UserInfo};

/// Creates the auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
}

/// POST /auth/login - Issue a token for the given email.
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    if let Some(message) = payload.validation_error() {
        return Err(ApiError::validation(message));
    }

    let token = state
        .jwt_service
        .generate_access_token(&payload.email)
        .map_err(|e| {
            error!(error = %e, "Failed to generate access token");
            ApiError(AppError::Internal(e.to_string()))
        })?;

    info!(email = %payload.email, "Demo login");

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
        expires_in: state.jwt_service.access_token_expires_in(),
        user: UserInfo {
            email: payload.email,
        },
    }))
}

/// GET /auth/me - Echo the caller's token claims.
async fn me(auth: AuthUser) -> impl IntoResponse {
    Json(json!({
        "email": auth.email(),
        "expires_at": auth.claims().exp
    }))
}
