//! In-memory receivable store

use chrono::NaiveDateTime;
use dashmap::DashMap;

use core_kernel::{ContractId, CustomerId, DateRange, ReceivableId, StoreError};
use domain_receivable::{PaymentProgress, Receivable, ReceivableStore};

/// Concurrent-map implementation of [`ReceivableStore`]
#[derive(Debug, Default)]
pub struct InMemoryReceivableStore {
    rows: DashMap<ReceivableId, Receivable>,
}

impl InMemoryReceivableStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReceivableStore for InMemoryReceivableStore {
    fn save(&self, receivable: Receivable) -> Result<Receivable, StoreError> {
        self.rows.insert(receivable.id, receivable.clone());
        Ok(receivable)
    }

    fn find_by_id(&self, id: ReceivableId) -> Result<Option<Receivable>, StoreError> {
        Ok(self.rows.get(&id).map(|entry| entry.value().clone()))
    }

    fn find_by_customer(&self, customer_id: CustomerId) -> Result<Vec<Receivable>, StoreError> {
        Ok(self
            .rows
            .iter()
            .filter(|entry| entry.value().customer_id == customer_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn find_by_contract(&self, contract_id: ContractId) -> Result<Vec<Receivable>, StoreError> {
        Ok(self
            .rows
            .iter()
            .filter(|entry| entry.value().contract_id == Some(contract_id))
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn find_by_progress(&self, progress: PaymentProgress) -> Result<Vec<Receivable>, StoreError> {
        Ok(self
            .rows
            .iter()
            .filter(|entry| entry.value().status.progress == progress)
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn find_overdue(&self, as_of: NaiveDateTime) -> Result<Vec<Receivable>, StoreError> {
        Ok(self
            .rows
            .iter()
            .filter(|entry| {
                let r = entry.value();
                r.due_date.is_some_and(|due| due < as_of) && !r.status.is_paid()
            })
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn find_due_between(&self, range: DateRange) -> Result<Vec<Receivable>, StoreError> {
        Ok(self
            .rows
            .iter()
            .filter(|entry| entry.value().due_date.is_some_and(|due| range.contains(due)))
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn find_all(&self) -> Result<Vec<Receivable>, StoreError> {
        Ok(self.rows.iter().map(|entry| entry.value().clone()).collect())
    }

    fn delete(&self, id: ReceivableId) -> Result<(), StoreError> {
        self.rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("Receivable", id))
    }

    fn exists(&self, id: ReceivableId) -> Result<bool, StoreError> {
        Ok(self.rows.contains_key(&id))
    }
}
