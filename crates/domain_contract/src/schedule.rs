//! Receivable schedule generation
//!
//! Turns contract terms into receivable rows: the down payment at
//! activation, one installment per term month, and the fee receivables
//! raised during servicing (late payment, early termination).

use std::sync::Arc;

use chrono::{Months, NaiveDateTime};
use tracing::{debug, info};

use core_kernel::{ContractId, CustomerId, Money, ReceivableId};
use domain_receivable::{Receivable, ReceivableStore, ReceivableType};

use crate::contract::Contract;
use crate::error::ContractError;
use crate::ports::ContractStore;

/// Generates receivables from contract terms
pub struct ReceivableScheduler {
    contracts: Arc<dyn ContractStore>,
    receivables: Arc<dyn ReceivableStore>,
}

impl ReceivableScheduler {
    pub fn new(
        contracts: Arc<dyn ContractStore>,
        receivables: Arc<dyn ReceivableStore>,
    ) -> Self {
        Self {
            contracts,
            receivables,
        }
    }

    /// Persists a new contract and raises its down-payment receivable
    ///
    /// When the contract carries a positive down payment, a `DownPayment`
    /// receivable due at contract start is created alongside it.
    pub fn activate_contract(
        &self,
        contract: Contract,
        now: NaiveDateTime,
    ) -> Result<Contract, ContractError> {
        let contract = self.contracts.save(contract)?;

        if let Some(down_payment) = contract.down_payment {
            if down_payment.is_positive() {
                let receivable = Receivable::new(
                    contract.customer_id,
                    ReceivableType::DownPayment,
                    down_payment,
                    now,
                )?
                .with_contract(contract.id)
                .with_due_date(contract.start_date)
                .with_description(format!(
                    "Down payment for contract {}",
                    contract.contract_number
                ));
                self.receivables.save(receivable)?;
            }
        }

        info!(contract = %contract.id, number = %contract.contract_number, "contract activated");
        Ok(contract)
    }

    /// Generates one installment receivable per term month
    ///
    /// Due dates advance one month at a time from the contract start; the
    /// first installment falls due one month in.
    pub fn generate_monthly_receivables(
        &self,
        contract_id: ContractId,
        now: NaiveDateTime,
    ) -> Result<Vec<Receivable>, ContractError> {
        let contract = self
            .contracts
            .find_by_id(contract_id)?
            .ok_or(ContractError::NotFound(contract_id))?;

        let mut receivables = Vec::with_capacity(contract.term_months as usize);
        let mut due_date = contract.start_date;

        for installment in 1..=contract.term_months {
            due_date = due_date.checked_add_months(Months::new(1)).ok_or_else(|| {
                ContractError::Validation(format!(
                    "Due date overflow at installment {}",
                    installment
                ))
            })?;

            let receivable = Receivable::new(
                contract.customer_id,
                ReceivableType::MonthlyPayment,
                contract.monthly_payment,
                now,
            )?
            .with_contract(contract.id)
            .with_due_date(due_date)
            .with_description(format!(
                "Monthly payment {} of {}",
                installment, contract.term_months
            ));

            let saved = self.receivables.save(receivable)?;
            receivables.push(saved);
        }

        debug!(
            contract = %contract.id,
            installments = receivables.len(),
            "installment schedule generated"
        );
        Ok(receivables)
    }

    /// Raises a late-fee receivable against an overdue receivable
    ///
    /// The fee inherits the contract and customer of the receivable it
    /// penalizes and falls due immediately.
    pub fn assess_late_fee(
        &self,
        receivable_id: ReceivableId,
        fee: Money,
        now: NaiveDateTime,
    ) -> Result<Receivable, ContractError> {
        let original = self
            .receivables
            .find_by_id(receivable_id)?
            .ok_or(ContractError::ReceivableNotFound(receivable_id))?;

        let mut late_fee =
            Receivable::new(original.customer_id, ReceivableType::LateFee, fee, now)?
                .with_due_date(now)
                .with_description(match &original.invoice_number {
                    Some(invoice) => format!("Late fee for invoice {}", invoice),
                    None => format!("Late fee for receivable {}", original.id),
                });
        if let Some(contract_id) = original.contract_id {
            late_fee = late_fee.with_contract(contract_id);
        }

        Ok(self.receivables.save(late_fee)?)
    }

    /// Terminates a contract before term
    ///
    /// Marks the contract `Terminated` and, when a positive fee is
    /// supplied, raises an `EarlyTermination` receivable due immediately.
    pub fn terminate_contract(
        &self,
        contract_id: ContractId,
        early_termination_fee: Option<Money>,
        now: NaiveDateTime,
    ) -> Result<Contract, ContractError> {
        let mut contract = self
            .contracts
            .find_by_id(contract_id)?
            .ok_or(ContractError::NotFound(contract_id))?;

        contract.terminate(now);

        if let Some(fee) = early_termination_fee {
            if fee.is_positive() {
                let receivable = Receivable::new(
                    contract.customer_id,
                    ReceivableType::EarlyTermination,
                    fee,
                    now,
                )?
                .with_contract(contract.id)
                .with_due_date(now)
                .with_description("Early termination fee");
                self.receivables.save(receivable)?;
            }
        }

        info!(contract = %contract.id, "contract terminated");
        Ok(self.contracts.save(contract)?)
    }

    /// Returns all contracts held by a customer
    pub fn customer_contracts(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Contract>, ContractError> {
        Ok(self.contracts.find_by_customer(customer_id)?)
    }
}
