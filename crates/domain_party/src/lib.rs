//! Party Domain - Customers
//!
//! This crate models the customers who owe money under lease and loan
//! contracts. A customer is either a natural person or a business; the
//! distinction is a tagged variant on the name, not a set of nullable
//! columns, so display and reporting code never branches on missing fields.

pub mod customer;
pub mod address;
pub mod error;
pub mod ports;

pub use customer::{Customer, CustomerName, CustomerStatus};
pub use address::Address;
pub use error::PartyError;
pub use ports::CustomerStore;
