//! Core Kernel - Foundational types for the receivables system
//!
//! This crate provides the building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed entity identifiers
//! - Naive-datetime temporal helpers matching the ledger wire format
//! - The shared store-port error type

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod ports;

pub use money::{Money, Currency, Rate, MoneyError};
pub use temporal::{DateRange, TemporalError, whole_days_between};
pub use identifiers::{
    CustomerId, ContractId, VehicleId, ReceivableId,
    PaymentId, AllocationId, AgingBucketId,
};
pub use ports::StoreError;
