//! API routes
//!
//! - [`health`] - liveness probe
//! - [`employees`] - employee CRUD

pub mod employees;
pub mod health;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(employees::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
