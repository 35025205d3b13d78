//! Store ports shared across domains
//!
//! Each domain defines its own store trait (the Ledger Store contract for
//! its entities) next to the entities it persists; adapters in `infra_store`
//! implement those traits. All of them share this error type so engines can
//! fold storage failures into their domain errors with `#[from]`.
//!
//! Store traits are synchronous: allocation and aging are non-cooperative
//! units of work, and the in-memory backend never blocks. A database-backed
//! adapter is expected to run its own executor behind the same interface.

use std::fmt;
use thiserror::Error;

/// Error type for store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested entity was not found
    #[error("Not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// The operation conflicts with existing data
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The backing store failed
    #[error("Storage error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Creates a NotFound error
    pub fn not_found(entity: &'static str, id: impl fmt::Display) -> Self {
        StoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found() {
        let error = StoreError::not_found("Receivable", "RCV-123");
        assert!(error.is_not_found());
        assert!(error.to_string().contains("Receivable"));
        assert!(error.to_string().contains("RCV-123"));
    }

    #[test]
    fn test_backend_is_not_not_found() {
        assert!(!StoreError::Backend("disk full".into()).is_not_found());
    }
}
