//! Store adapter implementations

pub mod aging;
pub mod allocation;
pub mod contract;
pub mod customer;
pub mod payment;
pub mod receivable;
