//! In-memory Ledger Store
//!
//! One adapter per store port, each backed by a `DashMap` keyed by entity
//! id: safe concurrent read/insert/update with no iteration-order
//! guarantee, which is all the engines require. Secondary lookups
//! (by customer, contract, status, date range) scan the map.
//!
//! These adapters are the reference backend for tests and embedders; a
//! database-backed implementation satisfies the same port traits.

pub mod stores;

pub use stores::allocation::InMemoryAllocationStore;
pub use stores::aging::InMemoryAgingBucketStore;
pub use stores::contract::InMemoryContractStore;
pub use stores::customer::InMemoryCustomerStore;
pub use stores::payment::InMemoryPaymentStore;
pub use stores::receivable::InMemoryReceivableStore;

use std::sync::Arc;

/// All in-memory stores, wired together
///
/// Convenience aggregate for constructing the engines: every store is
/// shared behind an `Arc` so engines and tests can hold the same instance.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    pub customers: Arc<InMemoryCustomerStore>,
    pub contracts: Arc<InMemoryContractStore>,
    pub receivables: Arc<InMemoryReceivableStore>,
    pub payments: Arc<InMemoryPaymentStore>,
    pub allocations: Arc<InMemoryAllocationStore>,
    pub aging_buckets: Arc<InMemoryAgingBucketStore>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}
