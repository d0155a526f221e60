//! Catalog domain module.
//!
//! This crate contains the produce catalog: validating value objects for
//! codes, names and prices, and the mutex-guarded in-memory store built on
//! top of them (no IO, no HTTP).

pub mod code;
pub mod item;
pub mod name;
pub mod price;
pub mod seed;
pub mod store;

pub use code::ProduceCode;
pub use item::{Item, NewItem, validate_batch};
pub use name::ItemName;
pub use price::UnitPrice;
pub use store::{CatalogStore, InMemoryCatalogStore};
