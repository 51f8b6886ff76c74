//! Page services coordinating the ports.

use thiserror::Error;

use crate::api::errors::ApiError;
use crate::forms::supplier::FormValidation;
use crate::services::supplier::PageState;

pub mod supplier;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation errors: {0}")]
    Validation(FormValidation),

    #[error("failed to fetch supplier: {0}")]
    Fetch(#[source] ApiError),

    #[error("failed to update supplier: {0}")]
    Submit(#[source] ApiError),

    #[error("supplier identifier is missing")]
    MissingIdentifier,

    #[error("action not allowed while the page is {0}")]
    InvalidState(PageState),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
