//! Contract Domain - Lease/Loan Contracts
//!
//! Contracts are where receivables come from: a signed lease or loan
//! implies a down payment, a monthly installment schedule, and - when
//! things go wrong - late fees and early-termination fees. This crate
//! holds the contract entity and the scheduler that turns contract terms
//! into receivable rows.

pub mod contract;
pub mod schedule;
pub mod ports;
pub mod error;

pub use contract::{Contract, ContractStatus, ContractType, PaymentFrequency};
pub use schedule::ReceivableScheduler;
pub use ports::ContractStore;
pub use error::ContractError;
