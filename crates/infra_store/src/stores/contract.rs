//! In-memory contract store

use dashmap::DashMap;

use core_kernel::{ContractId, CustomerId, StoreError};
use domain_contract::{Contract, ContractStatus, ContractStore};

/// Concurrent-map implementation of [`ContractStore`]
#[derive(Debug, Default)]
pub struct InMemoryContractStore {
    rows: DashMap<ContractId, Contract>,
}

impl InMemoryContractStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContractStore for InMemoryContractStore {
    fn save(&self, contract: Contract) -> Result<Contract, StoreError> {
        self.rows.insert(contract.id, contract.clone());
        Ok(contract)
    }

    fn find_by_id(&self, id: ContractId) -> Result<Option<Contract>, StoreError> {
        Ok(self.rows.get(&id).map(|entry| entry.value().clone()))
    }

    fn find_by_customer(&self, customer_id: CustomerId) -> Result<Vec<Contract>, StoreError> {
        Ok(self
            .rows
            .iter()
            .filter(|entry| entry.value().customer_id == customer_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn find_by_status(&self, status: ContractStatus) -> Result<Vec<Contract>, StoreError> {
        Ok(self
            .rows
            .iter()
            .filter(|entry| entry.value().status == status)
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn find_all(&self) -> Result<Vec<Contract>, StoreError> {
        Ok(self.rows.iter().map(|entry| entry.value().clone()).collect())
    }

    fn delete(&self, id: ContractId) -> Result<(), StoreError> {
        self.rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("Contract", id))
    }

    fn exists(&self, id: ContractId) -> Result<bool, StoreError> {
        Ok(self.rows.contains_key(&id))
    }
}
