use core::fmt;

use serde::Serialize;

use supermarket_core::{Field, FieldError};

/// Display name of a catalog item: ASCII letters, digits and spaces only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        if raw.is_empty() {
            return Err(FieldError::Required(Field::Name));
        }
        if !raw.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ') {
            return Err(FieldError::InvalidFormat(Field::Name));
        }
        Ok(Self(raw.to_string()))
    }

    pub(crate) fn new_unchecked(raw: &str) -> Self {
        debug_assert!(Self::parse(raw).is_ok(), "malformed item name literal: {raw}");
        Self(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
