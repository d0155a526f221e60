use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use supermarket_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation { .. } => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", err.to_string())
        }
        DomainError::InvalidCode(e) => json_error(StatusCode::BAD_REQUEST, "invalid_code", e.to_string()),
        // Absence is an ordinary answer, not a failed request.
        DomainError::NotFound(_) => json_error(StatusCode::OK, "not_found", "code not found"),
    }
}

/// A body that does not decode into the expected shape (e.g. a numeric price).
///
/// A missing or non-JSON content type keeps axum's 415; every other
/// rejection is a 400.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            json_error(rejection.status(), "unsupported_media_type", rejection.body_text())
        }
        _ => json_error(StatusCode::BAD_REQUEST, "invalid_body", rejection.body_text()),
    }
}

/// A path segment that cannot be extracted (e.g. percent-decodes to invalid
/// UTF-8) is a malformed code.
pub fn path_rejection_to_response(rejection: PathRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_code", rejection.body_text())
}

pub fn endpoint_not_found() -> axum::response::Response {
    json_error(
        StatusCode::METHOD_NOT_ALLOWED,
        "endpoint_not_found",
        "endpoint not found",
    )
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
