//! Shared types, errors, and configuration for Cinetrack.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management
//! - JWT issuing and validation for the demo login

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod types;

pub use auth::{Claims, LoginRequest, LoginResponse};
pub use config::{AppConfig, GeminiConfig, JwtSettings};
pub use error::{AppError, AppResult};
pub use jwt::{JwtConfig, JwtError, JwtService};

#[cfg(test)]
#[path = "auth_tests.rs"]
mod auth_tests;
