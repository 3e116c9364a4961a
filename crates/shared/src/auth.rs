//! Authentication types for the demo login.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JWT claims for access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user email).
    pub sub: String,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a user.
    #[must_use]
    pub fn new(email: &str, expires_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            sub: email.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the email the token was issued to.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.sub
    }
}

/// Login request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// User email.
    pub email: String,
    /// User password.
    pub password: String,
}

impl LoginRequest {
    /// Returns a validation message when either credential is blank.
    #[must_use]
    pub fn validation_error(&self) -> Option<&'static str> {
        if self.email.trim().is_empty() {
            Some("email is required")
        } else if self.password.is_empty() {
            Some("password is required")
        } else {
            None
        }
    }
}

/// Login response payload.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    /// Human-readable status.
    pub message: String,
    /// Access token.
    pub token: String,
    /// Token expiration in seconds.
    pub expires_in: i64,
    /// Authenticated user info.
    pub user: UserInfo,
}

/// User info returned in auth responses.
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    /// User email.
    pub email: String,
}
