use axum::http::StatusCode;

use crate::app::errors;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn ping() -> &'static str {
    "pong"
}

/// Fallback for unknown paths and unsupported methods on known paths.
pub async fn endpoint_not_found(uri: axum::http::Uri, method: axum::http::Method) -> axum::response::Response {
    tracing::info!(%method, %uri, "endpoint not found");
    errors::endpoint_not_found()
}
