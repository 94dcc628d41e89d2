//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`              - Create a record for a long URL
//! - `GET  /shorten/{shortCode}`  - Fetch the record for a short code
//! - `GET  /shorten/`             - Rejected with 400 (empty short code)
//! - `GET  /health`               - Store health check
//!
//! Unmatched paths under `/shorten/` (e.g. `/shorten//`) get 400, all others 404.
//!
//! # Middleware
//!
//! - **Panic recovery** - Handler panics become 500 responses
//! - **Tracing** - Structured request/response logging

use crate::api::handlers::{
    get_record_handler, health_handler, missing_code_handler, shorten_handler,
    unmatched_path_handler,
};
use crate::api::middleware::{panic, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/shorten/", get(missing_code_handler))
        .route("/shorten/{code}", get(get_record_handler))
        .route("/health", get(health_handler))
        .fallback(unmatched_path_handler)
        .with_state(state);

    with_middleware(router)
}

/// Wraps a router in the standard middleware stack.
///
/// Panic recovery sits inside the trace layer so recovered panics are still
/// logged with their request span and final status.
pub fn with_middleware(router: Router) -> Router {
    router.layer(panic::layer()).layer(tracing::layer())
}
