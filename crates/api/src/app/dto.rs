use serde::Serialize;

use supermarket_catalog::NewItem;

pub const ITEM_ADDED: &str = "item added";
pub const ITEM_EXISTS: &str = "item exist, not added";
pub const ITEM_DELETED: &str = "item deleted";

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /add`: a JSON array of item submissions.
pub type AddItemsRequest = Vec<NewItem>;

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn new(status: &'static str) -> Self {
        Self { status }
    }
}
