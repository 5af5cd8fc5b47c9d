//! HTTP API application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: service-contract wiring (which adapters back the handlers)
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router around a service bundle.
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .route("/datetime", get(routes::system::datetime))
        .merge(routes::router().layer(Extension(services)))
}

/// Router over the in-memory adapters (dev wiring; used by `main.rs`).
pub fn build_in_memory_app() -> Router {
    build_app(Arc::new(services::build_in_memory_services()))
}
