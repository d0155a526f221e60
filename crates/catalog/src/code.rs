use core::fmt;
use core::str::FromStr;

use serde::Serialize;

use supermarket_core::{Field, FieldError};

const GROUPS: usize = 4;
const GROUP_LEN: usize = 4;
/// `XXXX-XXXX-XXXX-XXXX`: four groups plus three separators.
const CODE_LEN: usize = GROUPS * GROUP_LEN + (GROUPS - 1);

/// Produce code: four hyphen-separated groups of four `A-Z`/`0-9` characters.
///
/// Matching is case-sensitive; lowercase letters are rejected.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ProduceCode(String);

impl ProduceCode {
    /// Validate `raw` and wrap it.
    ///
    /// An empty string is reported as [`FieldError::Required`]; anything else
    /// that does not match the grammar is [`FieldError::InvalidFormat`].
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        if raw.is_empty() {
            return Err(FieldError::Required(Field::Code));
        }
        if !is_produce_code(raw) {
            return Err(FieldError::InvalidFormat(Field::Code));
        }
        Ok(Self(raw.to_string()))
    }

    /// Build a code from a literal known to be well-formed (seed data).
    pub(crate) fn new_unchecked(raw: &str) -> Self {
        debug_assert!(is_produce_code(raw), "malformed produce code literal: {raw}");
        Self(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_produce_code(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    if bytes.len() != CODE_LEN {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| {
        if (i + 1) % (GROUP_LEN + 1) == 0 {
            *b == b'-'
        } else {
            b.is_ascii_uppercase() || b.is_ascii_digit()
        }
    })
}

impl FromStr for ProduceCode {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ProduceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProduceCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
