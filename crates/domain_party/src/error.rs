//! Party domain errors

use core_kernel::StoreError;
use thiserror::Error;

/// Errors that can occur in the party domain
#[derive(Debug, Error)]
pub enum PartyError {
    /// Malformed or out-of-range input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Customer not found
    #[error("Customer not found: {0}")]
    NotFound(String),

    /// Storage failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
