use axum::{
    routing::{get, post},
    Router,
};

pub mod items;
pub mod system;

/// Router for the versioned catalog endpoints (mounted under `/api/v1`).
pub fn router() -> Router {
    Router::new()
        .route("/ping", get(system::ping).fallback(system::endpoint_not_found))
        .route("/items", get(items::list_items).fallback(system::endpoint_not_found))
        .route("/add", post(items::add_items).fallback(system::endpoint_not_found))
        .route("/item/:code", get(items::get_item).fallback(system::endpoint_not_found))
        .route("/delete/:code", get(items::delete_item).fallback(system::endpoint_not_found))
}
