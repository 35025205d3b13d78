//! In-memory payment store

use dashmap::DashMap;

use core_kernel::{CustomerId, DateRange, PaymentId, StoreError};
use domain_payment::{Payment, PaymentStatus, PaymentStore};

/// Concurrent-map implementation of [`PaymentStore`]
#[derive(Debug, Default)]
pub struct InMemoryPaymentStore {
    rows: DashMap<PaymentId, Payment>,
}

impl InMemoryPaymentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PaymentStore for InMemoryPaymentStore {
    fn save(&self, payment: Payment) -> Result<Payment, StoreError> {
        self.rows.insert(payment.id, payment.clone());
        Ok(payment)
    }

    fn find_by_id(&self, id: PaymentId) -> Result<Option<Payment>, StoreError> {
        Ok(self.rows.get(&id).map(|entry| entry.value().clone()))
    }

    fn find_by_customer(&self, customer_id: CustomerId) -> Result<Vec<Payment>, StoreError> {
        Ok(self
            .rows
            .iter()
            .filter(|entry| entry.value().customer_id == customer_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn find_by_status(&self, status: PaymentStatus) -> Result<Vec<Payment>, StoreError> {
        Ok(self
            .rows
            .iter()
            .filter(|entry| entry.value().status == status)
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn find_paid_between(&self, range: DateRange) -> Result<Vec<Payment>, StoreError> {
        Ok(self
            .rows
            .iter()
            .filter(|entry| range.contains(entry.value().payment_date))
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn find_all(&self) -> Result<Vec<Payment>, StoreError> {
        Ok(self.rows.iter().map(|entry| entry.value().clone()).collect())
    }

    fn delete(&self, id: PaymentId) -> Result<(), StoreError> {
        self.rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("Payment", id))
    }

    fn exists(&self, id: PaymentId) -> Result<bool, StoreError> {
        Ok(self.rows.contains_key(&id))
    }
}
