//! In-memory customer store

use dashmap::DashMap;

use core_kernel::{CustomerId, StoreError};
use domain_party::{Customer, CustomerStatus, CustomerStore};

/// Concurrent-map implementation of [`CustomerStore`]
#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    rows: DashMap<CustomerId, Customer>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CustomerStore for InMemoryCustomerStore {
    fn save(&self, customer: Customer) -> Result<Customer, StoreError> {
        self.rows.insert(customer.id, customer.clone());
        Ok(customer)
    }

    fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        Ok(self.rows.get(&id).map(|entry| entry.value().clone()))
    }

    fn find_by_status(&self, status: CustomerStatus) -> Result<Vec<Customer>, StoreError> {
        Ok(self
            .rows
            .iter()
            .filter(|entry| entry.value().status == status)
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn find_all(&self) -> Result<Vec<Customer>, StoreError> {
        Ok(self.rows.iter().map(|entry| entry.value().clone()).collect())
    }

    fn delete(&self, id: CustomerId) -> Result<(), StoreError> {
        self.rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("Customer", id))
    }

    fn exists(&self, id: CustomerId) -> Result<bool, StoreError> {
        Ok(self.rows.contains_key(&id))
    }
}
