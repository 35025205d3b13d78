//! Receivable Domain - Lifecycle and Aging
//!
//! This crate owns the receivable: an amount owed by a customer under a
//! vehicle lease or loan contract. It covers two of the three engines in
//! the receivables core:
//!
//! - **Lifecycle**: how a receivable's balances and status evolve as
//!   payment allocations land against it. The balance invariant
//!   `paid + outstanding == original` holds at every observable point.
//! - **Aging**: the batch process that measures how many days past due
//!   each open receivable is, reclassifies it, and appends dated snapshot
//!   buckets for collections reporting.
//!
//! Status is a tagged pair of independent axes - payment progress
//! (pending/partial/paid/written-off) and timeliness (current/overdue) -
//! so a partially paid receivable that goes overdue keeps both facts.

pub mod receivable;
pub mod aging;
pub mod ports;
pub mod error;

pub use receivable::{
    Receivable, ReceivableStatus, ReceivableType, PaymentProgress, Timeliness,
};
pub use aging::{
    AgingBucket, AgingCategory, AgingEngine, AgingReport, AgingRunSummary,
};
pub use ports::{ReceivableStore, AgingBucketStore};
pub use error::ReceivableError;
