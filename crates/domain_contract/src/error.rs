//! Contract domain errors

use core_kernel::{ContractId, MoneyError, ReceivableId, StoreError, TemporalError};
use domain_receivable::ReceivableError;
use thiserror::Error;

/// Errors that can occur in the contract domain
#[derive(Debug, Error)]
pub enum ContractError {
    /// Malformed or out-of-range input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Contract not found
    #[error("Contract not found: {0}")]
    NotFound(ContractId),

    /// Referenced receivable not found
    #[error("Receivable not found: {0}")]
    ReceivableNotFound(ReceivableId),

    /// Money arithmetic failure
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    /// Invalid contract period
    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),

    /// Receivable creation failure
    #[error("Receivable error: {0}")]
    Receivable(#[from] ReceivableError),

    /// Storage failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
