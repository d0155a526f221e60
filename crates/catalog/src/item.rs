use serde::{Deserialize, Serialize};

use supermarket_core::{DomainError, DomainResult, Entity, FieldErrors};

use crate::{ItemName, ProduceCode, UnitPrice};

/// A catalog entry. Every field is a validated value object, so an `Item`
/// cannot hold a malformed code, name or price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    code: ProduceCode,
    name: ItemName,
    price: UnitPrice,
}

impl Item {
    pub fn new(code: ProduceCode, name: ItemName, price: UnitPrice) -> Self {
        Self { code, name, price }
    }

    pub fn code(&self) -> &ProduceCode {
        &self.code
    }

    pub fn name(&self) -> &ItemName {
        &self.name
    }

    pub fn price(&self) -> UnitPrice {
        self.price
    }
}

impl Entity for Item {
    type Id = ProduceCode;

    fn id(&self) -> &Self::Id {
        &self.code
    }
}

/// Unvalidated item submission, as decoded from a request body.
///
/// `price` is a string on purpose: a JSON number is a decode error, not a
/// validation error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewItem {
    pub code: String,
    pub name: String,
    pub price: String,
}

impl NewItem {
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            price: price.into(),
        }
    }

    /// Validate every field, collecting all failures in field order.
    pub fn validate(&self) -> Result<Item, FieldErrors> {
        let mut errors = FieldErrors::new();
        let code = ProduceCode::parse(&self.code).map_err(|e| errors.push(e)).ok();
        let name = ItemName::parse(&self.name).map_err(|e| errors.push(e)).ok();
        let price = UnitPrice::parse(&self.price).map_err(|e| errors.push(e)).ok();

        match (code, name, price) {
            (Some(code), Some(name), Some(price)) => Ok(Item::new(code, name, price)),
            _ => Err(errors),
        }
    }
}

/// Validate a batch, stopping at the first item that fails.
pub fn validate_batch(items: &[NewItem]) -> DomainResult<Vec<Item>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.validate()
                .map_err(|errors| DomainError::validation(index, errors))
        })
        .collect()
}
