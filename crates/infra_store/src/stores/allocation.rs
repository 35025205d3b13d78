//! In-memory payment-allocation store

use dashmap::DashMap;

use core_kernel::{AllocationId, PaymentId, ReceivableId, StoreError};
use domain_payment::{AllocationStore, PaymentAllocation};

/// Concurrent-map implementation of [`AllocationStore`]
#[derive(Debug, Default)]
pub struct InMemoryAllocationStore {
    rows: DashMap<AllocationId, PaymentAllocation>,
}

impl InMemoryAllocationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AllocationStore for InMemoryAllocationStore {
    fn save(&self, allocation: PaymentAllocation) -> Result<PaymentAllocation, StoreError> {
        self.rows.insert(allocation.id, allocation.clone());
        Ok(allocation)
    }

    fn find_by_id(&self, id: AllocationId) -> Result<Option<PaymentAllocation>, StoreError> {
        Ok(self.rows.get(&id).map(|entry| entry.value().clone()))
    }

    fn find_by_payment(
        &self,
        payment_id: PaymentId,
    ) -> Result<Vec<PaymentAllocation>, StoreError> {
        Ok(self
            .rows
            .iter()
            .filter(|entry| entry.value().payment_id == payment_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn find_by_receivable(
        &self,
        receivable_id: ReceivableId,
    ) -> Result<Vec<PaymentAllocation>, StoreError> {
        Ok(self
            .rows
            .iter()
            .filter(|entry| entry.value().receivable_id == receivable_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn find_all(&self) -> Result<Vec<PaymentAllocation>, StoreError> {
        Ok(self.rows.iter().map(|entry| entry.value().clone()).collect())
    }

    fn delete(&self, id: AllocationId) -> Result<(), StoreError> {
        self.rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("PaymentAllocation", id))
    }

    fn exists(&self, id: AllocationId) -> Result<bool, StoreError> {
        Ok(self.rows.contains_key(&id))
    }
}
