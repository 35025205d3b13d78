//! In-memory aging-bucket store

use chrono::NaiveDateTime;
use dashmap::DashMap;

use core_kernel::{AgingBucketId, CustomerId, ReceivableId, StoreError};
use domain_receivable::{AgingBucket, AgingBucketStore, AgingCategory};

/// Concurrent-map implementation of [`AgingBucketStore`]
///
/// Buckets are append-only in practice: every aging run inserts fresh ids,
/// so the map only ever grows.
#[derive(Debug, Default)]
pub struct InMemoryAgingBucketStore {
    rows: DashMap<AgingBucketId, AgingBucket>,
}

impl InMemoryAgingBucketStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AgingBucketStore for InMemoryAgingBucketStore {
    fn save(&self, bucket: AgingBucket) -> Result<AgingBucket, StoreError> {
        self.rows.insert(bucket.id, bucket.clone());
        Ok(bucket)
    }

    fn find_by_id(&self, id: AgingBucketId) -> Result<Option<AgingBucket>, StoreError> {
        Ok(self.rows.get(&id).map(|entry| entry.value().clone()))
    }

    fn find_by_customer(&self, customer_id: CustomerId) -> Result<Vec<AgingBucket>, StoreError> {
        Ok(self
            .rows
            .iter()
            .filter(|entry| entry.value().customer_id == customer_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn find_by_receivable(
        &self,
        receivable_id: ReceivableId,
    ) -> Result<Vec<AgingBucket>, StoreError> {
        Ok(self
            .rows
            .iter()
            .filter(|entry| entry.value().receivable_id == receivable_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn find_by_category(&self, category: AgingCategory) -> Result<Vec<AgingBucket>, StoreError> {
        Ok(self
            .rows
            .iter()
            .filter(|entry| entry.value().category == category)
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn find_as_of(&self, as_of: NaiveDateTime) -> Result<Vec<AgingBucket>, StoreError> {
        Ok(self
            .rows
            .iter()
            .filter(|entry| entry.value().as_of == as_of)
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn find_all(&self) -> Result<Vec<AgingBucket>, StoreError> {
        Ok(self.rows.iter().map(|entry| entry.value().clone()).collect())
    }

    fn delete(&self, id: AgingBucketId) -> Result<(), StoreError> {
        self.rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("AgingBucket", id))
    }

    fn exists(&self, id: AgingBucketId) -> Result<bool, StoreError> {
        Ok(self.rows.contains_key(&id))
    }
}
