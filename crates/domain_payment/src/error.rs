//! Payment domain errors

use core_kernel::{MoneyError, PaymentId, ReceivableId, StoreError};
use domain_receivable::ReceivableError;
use thiserror::Error;

/// Errors that can occur in the payment domain
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Malformed or out-of-range input, rejected before any mutation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Payment not found
    #[error("Payment not found: {0}")]
    NotFound(PaymentId),

    /// A receivable named in the allocation order does not exist.
    /// Allocations recorded before this point in the waterfall stand.
    #[error("Receivable not found: {0}")]
    ReceivableNotFound(ReceivableId),

    /// An internal contract was broken; indicates a logic defect, not
    /// caller error
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Money arithmetic failure (currency mismatch)
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    /// Receivable lifecycle failure while applying an allocation
    #[error("Receivable error: {0}")]
    Receivable(#[from] ReceivableError),

    /// Storage failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
