//! Domain error model.

use core::fmt;

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// A validated field of a catalog item submission.
///
/// Variants are declared in validation order: errors for one item are always
/// reported code first, then name, then price.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Code,
    Name,
    Price,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Code => "code",
            Field::Name => "name",
            Field::Price => "price",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a single field.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The field was empty.
    #[error("{0}: required")]
    Required(Field),

    /// The field was present but did not match its format.
    #[error("{0}: invalid format")]
    InvalidFormat(Field),
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(f) | FieldError::InvalidFormat(f) => *f,
        }
    }
}

/// All field failures of one item, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, err: FieldError) {
        self.0.push(err);
        self.0.sort_by_key(FieldError::field);
    }
}

impl From<FieldError> for FieldErrors {
    fn from(err: FieldError) -> Self {
        Self(vec![err])
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            fmt::Display::fmt(err, f)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Routing
/// failures (unknown endpoint) belong to the HTTP layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An item of a submitted batch failed validation; the batch was rejected.
    #[error("[{index}]: {errors}")]
    Validation { index: usize, errors: FieldErrors },

    /// A produce code used as a lookup key was malformed.
    #[error("{0}")]
    InvalidCode(FieldError),

    /// A well-formed code is not in the catalog.
    #[error("code not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(index: usize, errors: FieldErrors) -> Self {
        Self::Validation { index, errors }
    }

    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound(code.into())
    }
}
