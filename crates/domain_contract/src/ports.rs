//! Store port for contracts

use core_kernel::{ContractId, CustomerId, StoreError};

use crate::contract::{Contract, ContractStatus};

/// Ledger Store contract for lease/loan contracts
pub trait ContractStore: Send + Sync {
    /// Persists a contract, inserting or replacing by id
    fn save(&self, contract: Contract) -> Result<Contract, StoreError>;

    /// Looks up a contract by id
    fn find_by_id(&self, id: ContractId) -> Result<Option<Contract>, StoreError>;

    /// Returns all contracts held by a customer
    fn find_by_customer(&self, customer_id: CustomerId) -> Result<Vec<Contract>, StoreError>;

    /// Returns all contracts with the given status
    fn find_by_status(&self, status: ContractStatus) -> Result<Vec<Contract>, StoreError>;

    /// Returns every contract
    fn find_all(&self) -> Result<Vec<Contract>, StoreError>;

    /// Removes a contract
    fn delete(&self, id: ContractId) -> Result<(), StoreError>;

    /// Returns true if a contract with the id exists
    fn exists(&self, id: ContractId) -> Result<bool, StoreError>;
}
