use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use supermarket_core::{DomainError, DomainResult, Entity};

use crate::seed::seed_items;
use crate::{Item, NewItem, ProduceCode, validate_batch};

/// Thread-safe catalog of produce items keyed by code.
pub trait CatalogStore: Send + Sync {
    /// Validate and insert a batch.
    ///
    /// The whole batch is rejected if any item is invalid. Items whose code is
    /// already present are skipped. Returns `true` if at least one item was new.
    fn add(&self, items: &[NewItem]) -> DomainResult<bool>;

    fn get(&self, code: &str) -> DomainResult<Item>;

    /// Remove an item. Removing a well-formed code that is absent still succeeds.
    fn delete(&self, code: &str) -> DomainResult<()>;

    /// All items, ordered by code.
    fn list(&self) -> Vec<Item>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    fn add(&self, items: &[NewItem]) -> DomainResult<bool> {
        (**self).add(items)
    }

    fn get(&self, code: &str) -> DomainResult<Item> {
        (**self).get(code)
    }

    fn delete(&self, code: &str) -> DomainResult<()> {
        (**self).delete(code)
    }

    fn list(&self) -> Vec<Item> {
        (**self).list()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// In-memory catalog: one mutex over a code-ordered map.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    inner: Mutex<BTreeMap<ProduceCode, Item>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let map = items
            .into_iter()
            .map(|item| (item.id().clone(), item))
            .collect();
        Self {
            inner: Mutex::new(map),
        }
    }

    /// A catalog holding the default produce.
    pub fn seeded() -> Self {
        Self::with_items(seed_items())
    }

    /// Lock the map, recovering it if a previous holder panicked.
    ///
    /// Every mutation is a single `insert` or `remove` on the map, so a panic
    /// can never leave it half-updated and the recovered map is a valid
    /// catalog. Bailing out on poison (`.ok()?` or an early return) would
    /// instead make `get` report every code as absent, `list` return an empty
    /// catalog and `add` silently drop items for the rest of the process.
    fn lock(&self) -> MutexGuard<'_, BTreeMap<ProduceCode, Item>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn parse_code(code: &str) -> DomainResult<ProduceCode> {
    ProduceCode::parse(code).map_err(DomainError::InvalidCode)
}

impl CatalogStore for InMemoryCatalogStore {
    fn add(&self, items: &[NewItem]) -> DomainResult<bool> {
        let items = validate_batch(items)?;

        let mut map = self.lock();
        let mut inserted = 0usize;
        for item in items {
            if map.contains_key(item.code()) {
                tracing::debug!(code = %item.code(), "item exists, skipped");
                continue;
            }
            tracing::debug!(code = %item.code(), name = %item.name(), price = %item.price(), "item added");
            map.insert(item.code().clone(), item);
            inserted += 1;
        }

        Ok(inserted > 0)
    }

    fn get(&self, code: &str) -> DomainResult<Item> {
        let code = parse_code(code)?;
        self.lock()
            .get(&code)
            .cloned()
            .ok_or_else(|| DomainError::not_found(code.as_str()))
    }

    fn delete(&self, code: &str) -> DomainResult<()> {
        let code = parse_code(code)?;
        if self.lock().remove(&code).is_some() {
            tracing::debug!(code = %code, "item deleted");
        }
        Ok(())
    }

    fn list(&self) -> Vec<Item> {
        self.lock().values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.lock().len()
    }
}
