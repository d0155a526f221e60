//! `supermarket-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the validation error taxonomy and the entity marker trait.

pub mod entity;
pub mod error;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, Field, FieldError, FieldErrors};
