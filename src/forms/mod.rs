//! Form definitions backing the supplier edit page.

use thiserror::Error;

pub mod supplier;

#[derive(Debug, Error, PartialEq, Eq)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
}
