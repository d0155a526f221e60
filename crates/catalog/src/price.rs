use core::fmt;

use serde::{Serialize, Serializer};

use supermarket_core::{Field, FieldError};

/// Unit price held as whole cents.
///
/// Input form is `<digits>.<two digits>` with no currency symbol; the display
/// form adds a leading `$` (`"3.41"` parses to 341 and renders as `$3.41`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnitPrice(u64);

impl UnitPrice {
    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Parse a decimal price string without going through floating point.
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        if raw.is_empty() {
            return Err(FieldError::Required(Field::Price));
        }
        parse_cents(raw)
            .map(Self)
            .ok_or(FieldError::InvalidFormat(Field::Price))
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Decimal form without the currency symbol, accepted back by [`UnitPrice::parse`].
    pub fn to_decimal_string(&self) -> String {
        format!("{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

fn parse_cents(raw: &str) -> Option<u64> {
    let (whole, frac) = raw.split_once('.')?;
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if frac.len() != 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let whole: u64 = whole.parse().ok()?;
    let frac: u64 = frac.parse().ok()?;
    whole.checked_mul(100)?.checked_add(frac)
}

impl fmt::Display for UnitPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.to_decimal_string())
    }
}

impl Serialize for UnitPrice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
