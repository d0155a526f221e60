//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: catalog wiring shared by handlers
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use crate::config::ApiConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Router {
    build_app_with_services(services::build_services(config))
}

/// Build the router around already-wired services.
pub fn build_app_with_services(services: AppServices) -> Router {
    Router::new()
        .route(
            "/health",
            get(routes::system::health).fallback(routes::system::endpoint_not_found),
        )
        .nest("/api/v1", routes::router())
        .fallback(routes::system::endpoint_not_found)
        .layer(Extension(Arc::new(services)))
}
