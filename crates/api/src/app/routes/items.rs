use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, Path,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::dto::{self, StatusResponse};
use crate::app::errors;
use crate::app::services::AppServices;

pub async fn list_items(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    (StatusCode::OK, Json(services.items_list())).into_response()
}

pub async fn add_items(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::AddItemsRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(items) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::info!(error = %rejection.body_text(), "add rejected: undecodable body");
            return errors::json_rejection_to_response(rejection);
        }
    };

    match services.items_add(&items) {
        Ok(true) => (StatusCode::CREATED, Json(StatusResponse::new(dto::ITEM_ADDED))).into_response(),
        Ok(false) => (StatusCode::OK, Json(StatusResponse::new(dto::ITEM_EXISTS))).into_response(),
        Err(e) => {
            tracing::info!(error = %e, batch = items.len(), "add rejected");
            errors::domain_error_to_response(e)
        }
    }
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    path: Result<Path<String>, PathRejection>,
) -> axum::response::Response {
    let Path(code) = match path {
        Ok(p) => p,
        Err(rejection) => return errors::path_rejection_to_response(rejection),
    };

    match services.items_get(&code) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    path: Result<Path<String>, PathRejection>,
) -> axum::response::Response {
    let Path(code) = match path {
        Ok(p) => p,
        Err(rejection) => return errors::path_rejection_to_response(rejection),
    };

    match services.items_delete(&code) {
        Ok(()) => (StatusCode::OK, Json(StatusResponse::new(dto::ITEM_DELETED))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
