//! Store ports for payments and allocations

use core_kernel::{CustomerId, DateRange, PaymentId, ReceivableId, StoreError};

use crate::allocation::PaymentAllocation;
use crate::payment::{Payment, PaymentStatus};

/// Ledger Store contract for payments
pub trait PaymentStore: Send + Sync {
    /// Persists a payment, inserting or replacing by id
    fn save(&self, payment: Payment) -> Result<Payment, StoreError>;

    /// Looks up a payment by id
    fn find_by_id(&self, id: PaymentId) -> Result<Option<Payment>, StoreError>;

    /// Returns all payments made by a customer
    fn find_by_customer(&self, customer_id: CustomerId) -> Result<Vec<Payment>, StoreError>;

    /// Returns all payments with the given status
    fn find_by_status(&self, status: PaymentStatus) -> Result<Vec<Payment>, StoreError>;

    /// Returns all payments received within the range (inclusive)
    fn find_paid_between(&self, range: DateRange) -> Result<Vec<Payment>, StoreError>;

    /// Returns every payment
    fn find_all(&self) -> Result<Vec<Payment>, StoreError>;

    /// Removes a payment
    fn delete(&self, id: PaymentId) -> Result<(), StoreError>;

    /// Returns true if a payment with the id exists
    fn exists(&self, id: PaymentId) -> Result<bool, StoreError>;
}

/// Ledger Store contract for payment allocations
pub trait AllocationStore: Send + Sync {
    /// Persists an allocation record
    fn save(&self, allocation: PaymentAllocation) -> Result<PaymentAllocation, StoreError>;

    /// Looks up an allocation by id
    fn find_by_id(
        &self,
        id: core_kernel::AllocationId,
    ) -> Result<Option<PaymentAllocation>, StoreError>;

    /// Returns all allocations recorded for a payment
    fn find_by_payment(&self, payment_id: PaymentId) -> Result<Vec<PaymentAllocation>, StoreError>;

    /// Returns all allocations applied to a receivable
    fn find_by_receivable(
        &self,
        receivable_id: ReceivableId,
    ) -> Result<Vec<PaymentAllocation>, StoreError>;

    /// Returns every allocation
    fn find_all(&self) -> Result<Vec<PaymentAllocation>, StoreError>;

    /// Removes an allocation
    fn delete(&self, id: core_kernel::AllocationId) -> Result<(), StoreError>;

    /// Returns true if an allocation with the id exists
    fn exists(&self, id: core_kernel::AllocationId) -> Result<bool, StoreError>;
}
