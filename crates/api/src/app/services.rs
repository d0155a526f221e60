use std::sync::Arc;

use supermarket_catalog::{CatalogStore, InMemoryCatalogStore, Item, NewItem};
use supermarket_core::DomainResult;

use crate::config::ApiConfig;

/// Services shared by every handler (one instance per running app).
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<dyn CatalogStore>,
}

/// Wire the in-memory catalog according to `config`.
pub fn build_services(config: &ApiConfig) -> AppServices {
    let catalog = if config.seed_catalog {
        InMemoryCatalogStore::seeded()
    } else {
        InMemoryCatalogStore::new()
    };
    tracing::info!(items = catalog.len(), "catalog ready");
    AppServices::new(Arc::new(catalog))
}

impl AppServices {
    pub fn new(catalog: Arc<dyn CatalogStore>) -> Self {
        Self { catalog }
    }

    pub fn items_add(&self, items: &[NewItem]) -> DomainResult<bool> {
        self.catalog.add(items)
    }

    pub fn items_get(&self, code: &str) -> DomainResult<Item> {
        self.catalog.get(code)
    }

    pub fn items_delete(&self, code: &str) -> DomainResult<()> {
        self.catalog.delete(code)
    }

    pub fn items_list(&self) -> Vec<Item> {
        self.catalog.list()
    }
}
