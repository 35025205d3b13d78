//! Store ports for receivables and aging buckets
//!
//! These traits are the Ledger Store contract the engines consume. The
//! in-memory adapters live in `infra_store`; a database-backed adapter
//! implements the same traits.

use chrono::NaiveDateTime;
use core_kernel::{ContractId, CustomerId, DateRange, ReceivableId, StoreError};

use crate::aging::{AgingBucket, AgingCategory};
use crate::receivable::{PaymentProgress, Receivable};

/// Ledger Store contract for receivables
pub trait ReceivableStore: Send + Sync {
    /// Persists a receivable, inserting or replacing by id
    fn save(&self, receivable: Receivable) -> Result<Receivable, StoreError>;

    /// Looks up a receivable by id
    fn find_by_id(&self, id: ReceivableId) -> Result<Option<Receivable>, StoreError>;

    /// Returns all receivables owed by a customer
    fn find_by_customer(&self, customer_id: CustomerId) -> Result<Vec<Receivable>, StoreError>;

    /// Returns all receivables arising from a contract
    fn find_by_contract(&self, contract_id: ContractId) -> Result<Vec<Receivable>, StoreError>;

    /// Returns all receivables at the given payment progress
    fn find_by_progress(&self, progress: PaymentProgress) -> Result<Vec<Receivable>, StoreError>;

    /// Returns all unpaid receivables whose due date has passed as of the
    /// given instant
    fn find_overdue(&self, as_of: NaiveDateTime) -> Result<Vec<Receivable>, StoreError>;

    /// Returns all receivables due within the range (inclusive)
    fn find_due_between(&self, range: DateRange) -> Result<Vec<Receivable>, StoreError>;

    /// Returns every receivable; iteration order is unspecified
    fn find_all(&self) -> Result<Vec<Receivable>, StoreError>;

    /// Removes a receivable
    fn delete(&self, id: ReceivableId) -> Result<(), StoreError>;

    /// Returns true if a receivable with the id exists
    fn exists(&self, id: ReceivableId) -> Result<bool, StoreError>;
}

/// Ledger Store contract for aging-bucket snapshots
///
/// Buckets are append-only: every aging run writes a new row per open
/// receivable and nothing is ever replaced.
pub trait AgingBucketStore: Send + Sync {
    /// Appends a bucket snapshot
    fn save(&self, bucket: AgingBucket) -> Result<AgingBucket, StoreError>;

    /// Looks up a bucket by id
    fn find_by_id(
        &self,
        id: core_kernel::AgingBucketId,
    ) -> Result<Option<AgingBucket>, StoreError>;

    /// Returns all snapshots taken for a customer, across every run
    fn find_by_customer(&self, customer_id: CustomerId) -> Result<Vec<AgingBucket>, StoreError>;

    /// Returns all snapshots taken for a receivable, across every run
    fn find_by_receivable(
        &self,
        receivable_id: ReceivableId,
    ) -> Result<Vec<AgingBucket>, StoreError>;

    /// Returns all snapshots in a category
    fn find_by_category(&self, category: AgingCategory) -> Result<Vec<AgingBucket>, StoreError>;

    /// Returns all snapshots taken at the given run instant
    fn find_as_of(&self, as_of: NaiveDateTime) -> Result<Vec<AgingBucket>, StoreError>;

    /// Returns every snapshot
    fn find_all(&self) -> Result<Vec<AgingBucket>, StoreError>;

    /// Removes a snapshot
    fn delete(&self, id: core_kernel::AgingBucketId) -> Result<(), StoreError>;

    /// Returns true if a snapshot with the id exists
    fn exists(&self, id: core_kernel::AgingBucketId) -> Result<bool, StoreError>;
}
