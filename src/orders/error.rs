use thiserror::Error;

use super::store::StoreError;
use super::validation::OrderValidationError;
use crate::checkout::CheckoutError;

/// Workflow failure. The handler layer logs the detail and collapses every
/// variant into the uniform server-error envelope; callers never see which
/// collaborator failed.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("invalid placement request: {0}")]
    Validation(#[from] OrderValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}
