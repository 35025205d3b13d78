//! Test Utilities Crate
//!
//! Shared test infrastructure for the receivables core test suites.
//!
//! # Modules
//!
//! - `fixtures`: deterministic amounts, instants, and identifiers
//! - `builders`: builder patterns for test data construction
//! - `assertions`: custom assertion helpers for domain invariants

pub mod fixtures;
pub mod builders;
pub mod assertions;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
