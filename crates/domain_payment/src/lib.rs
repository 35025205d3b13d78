//! Payment Domain - Payments and Allocation
//!
//! This crate records money received from customers and distributes each
//! payment across outstanding receivables. Distribution is a waterfall:
//! the caller supplies the receivable order (its policy lever - "fees
//! before principal" is expressed by list order, not by type), and the
//! engine clamps each application to the receivable's outstanding balance
//! so over-allocation is impossible.
//!
//! Any amount left after the waterfall is surfaced on the outcome rather
//! than dropped or turned into a credit; what to do with it is the
//! caller's decision.

pub mod payment;
pub mod allocation;
pub mod engine;
pub mod locks;
pub mod ports;
pub mod error;

pub use payment::{Payment, PaymentMethod, PaymentStatus};
pub use allocation::{
    AllocationSplit, PaymentAllocation, PrincipalOnly, SplitPolicy, WeightedSplit,
};
pub use engine::{AllocationOutcome, PaymentAllocationEngine};
pub use ports::{AllocationStore, PaymentStore};
pub use error::PaymentError;
