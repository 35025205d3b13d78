//! Store port for customers

use core_kernel::{CustomerId, StoreError};

use crate::customer::{Customer, CustomerStatus};

/// Ledger Store contract for customer records
pub trait CustomerStore: Send + Sync {
    /// Persists a customer, inserting or replacing by id
    fn save(&self, customer: Customer) -> Result<Customer, StoreError>;

    /// Looks up a customer by id
    fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, StoreError>;

    /// Returns all customers with the given status
    fn find_by_status(&self, status: CustomerStatus) -> Result<Vec<Customer>, StoreError>;

    /// Returns every customer
    fn find_all(&self) -> Result<Vec<Customer>, StoreError>;

    /// Removes a customer
    fn delete(&self, id: CustomerId) -> Result<(), StoreError>;

    /// Returns true if a customer with the id exists
    fn exists(&self, id: CustomerId) -> Result<bool, StoreError>;
}
