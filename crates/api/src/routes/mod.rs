//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod ai;
pub mod auth;
pub mod budget;
pub mod crew;
pub mod events;
pub mod health;
pub mod invoices;
pub mod projects;
pub mod purchase_orders;
pub mod reports;
pub mod schedule;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(projects::routes())
        .merge(budget::routes())
        .merge(purchase_orders::routes())
        .merge(invoices::routes())
        .merge(schedule::routes())
        .merge(crew::routes())
        .merge(reports::routes())
        .merge(events::routes())
        .merge(ai::routes())
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
