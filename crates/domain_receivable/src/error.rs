//! Receivable domain errors

use core_kernel::{MoneyError, ReceivableId, StoreError};
use thiserror::Error;

/// Errors that can occur in the receivable domain
#[derive(Debug, Error)]
pub enum ReceivableError {
    /// Malformed or out-of-range input, rejected before any mutation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Receivable not found
    #[error("Receivable not found: {0}")]
    NotFound(ReceivableId),

    /// An internal contract was broken; indicates a logic defect, not
    /// caller error
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Money arithmetic failure (currency mismatch)
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    /// Storage failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
