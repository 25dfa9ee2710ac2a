//! # Route Modules
//!
//! One module per resource, each exposing a `router()` that the top-level
//! router merges:
//!
//! - [`venues`] - Search, cities, detail, availability (public)
//! - [`packages`] - Packages, addons, time slots (public)
//! - [`bookings`] - Create/list/detail/cancel (bearer token required)
//! - [`assistant`] - Rule-based planning chat (public)
//! - [`auth`] - Register, login, profile

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod assistant;
pub mod auth;
pub mod bookings;
pub mod packages;
pub mod venues;

/// Builds the complete application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(venues::router())
        .merge(packages::router())
        .merge(bookings::router())
        .merge(assistant::router())
        .merge(auth::router())
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness endpoint for load balancers.
async fn health() -> &'static str {
    "ok"
}
