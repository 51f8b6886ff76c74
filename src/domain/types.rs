//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., non-empty, path-safe
//! identifiers) so that once a value reaches the page layer it can be
//! interpolated into request paths without further checks.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Identifier of a supplier as it appears in application routes.
///
/// Identifiers are opaque to the page: numeric and uuid-shaped values are both
/// accepted, as long as they only use characters that are safe inside a single
/// URL path segment.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct SupplierId(String);

impl SupplierId {
    /// Trims and validates the identifier.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        if !trimmed.chars().all(is_path_safe) {
            return Err(TypeConstraintError::InvalidValue(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the identifier as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_path_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

impl Display for SupplierId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SupplierId {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SupplierId {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for SupplierId {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SupplierId> for String {
    fn from(value: SupplierId) -> Self {
        value.0
    }
}
