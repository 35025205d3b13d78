//! Lease/loan contract entity

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use core_kernel::{ContractId, CustomerId, Money, Rate, VehicleId};

use crate::error::ContractError;

/// The financing arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractType {
    /// Vehicle lease; the vehicle returns at term end
    Lease,
    /// Vehicle loan; the customer owns the vehicle
    Loan,
}

/// How often installments fall due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentFrequency {
    Weekly,
    BiWeekly,
    Monthly,
}

/// Contract status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractStatus {
    /// In force
    Active,
    /// Ran to term
    Completed,
    /// Customer defaulted
    Defaulted,
    /// Ended before term
    Terminated,
}

/// A vehicle lease or loan contract
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    /// Unique identifier
    pub id: ContractId,
    /// Customer who signed
    pub customer_id: CustomerId,
    /// Vehicle under contract, if tracked
    pub vehicle_id: Option<VehicleId>,
    /// Human-readable contract number
    pub contract_number: String,
    /// Lease or loan
    pub contract_type: ContractType,
    /// Contract start
    pub start_date: NaiveDateTime,
    /// Contract end
    pub end_date: NaiveDateTime,
    /// Status
    pub status: ContractStatus,
    /// Amount financed
    pub principal_amount: Money,
    /// Annual interest rate
    pub interest_rate: Rate,
    /// Term length in months
    pub term_months: u32,
    /// How often installments fall due
    pub payment_frequency: PaymentFrequency,
    /// Installment amount
    pub monthly_payment: Money,
    /// Down payment due at start, if any
    pub down_payment: Option<Money>,
    /// Residual value at lease end
    pub residual_value: Option<Money>,
    /// Annual mileage limit (leases)
    pub mileage_limit: Option<u32>,
    /// Charge per mile over the limit
    pub excess_mileage_rate: Option<Money>,
    /// Refundable security deposit
    pub security_deposit: Option<Money>,
    /// Created timestamp
    pub created_date: NaiveDateTime,
    /// Last modified timestamp
    pub modified_date: NaiveDateTime,
}

impl Contract {
    /// Creates a new contract
    ///
    /// # Errors
    ///
    /// Returns `ContractError::Validation` if the term is zero, the
    /// principal or installment is negative, or the period is inverted.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        customer_id: CustomerId,
        contract_number: impl Into<String>,
        contract_type: ContractType,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
        principal_amount: Money,
        interest_rate: Rate,
        term_months: u32,
        monthly_payment: Money,
        created_at: NaiveDateTime,
    ) -> Result<Self, ContractError> {
        if term_months == 0 {
            return Err(ContractError::Validation(
                "Contract term must be at least one month".into(),
            ));
        }
        if principal_amount.is_negative() {
            return Err(ContractError::Validation(format!(
                "Principal must not be negative, got {}",
                principal_amount
            )));
        }
        if monthly_payment.is_negative() {
            return Err(ContractError::Validation(format!(
                "Installment must not be negative, got {}",
                monthly_payment
            )));
        }
        if start_date >= end_date {
            return Err(ContractError::Validation(format!(
                "Contract period is inverted: {} >= {}",
                start_date, end_date
            )));
        }

        Ok(Self {
            id: ContractId::new_v7(),
            customer_id,
            vehicle_id: None,
            contract_number: contract_number.into(),
            contract_type,
            start_date,
            end_date,
            status: ContractStatus::Active,
            principal_amount,
            interest_rate,
            term_months,
            payment_frequency: PaymentFrequency::Monthly,
            monthly_payment,
            down_payment: None,
            residual_value: None,
            mileage_limit: None,
            excess_mileage_rate: None,
            security_deposit: None,
            created_date: created_at,
            modified_date: created_at,
        })
    }

    /// Ties the contract to a vehicle
    pub fn with_vehicle(mut self, vehicle_id: VehicleId) -> Self {
        self.vehicle_id = Some(vehicle_id);
        self
    }

    /// Sets the down payment due at contract start
    pub fn with_down_payment(mut self, down_payment: Money) -> Self {
        self.down_payment = Some(down_payment);
        self
    }

    /// Sets the residual value
    pub fn with_residual_value(mut self, residual_value: Money) -> Self {
        self.residual_value = Some(residual_value);
        self
    }

    /// Sets the mileage limit and the per-mile charge above it
    pub fn with_mileage_limit(mut self, limit: u32, excess_rate: Money) -> Self {
        self.mileage_limit = Some(limit);
        self.excess_mileage_rate = Some(excess_rate);
        self
    }

    /// Sets the security deposit
    pub fn with_security_deposit(mut self, deposit: Money) -> Self {
        self.security_deposit = Some(deposit);
        self
    }

    /// Sets the installment frequency
    pub fn with_payment_frequency(mut self, frequency: PaymentFrequency) -> Self {
        self.payment_frequency = frequency;
        self
    }

    /// Marks the contract as run to term
    pub fn complete(&mut self, at: NaiveDateTime) {
        self.status = ContractStatus::Completed;
        self.modified_date = at;
    }

    /// Marks the contract as defaulted
    pub fn mark_defaulted(&mut self, at: NaiveDateTime) {
        self.status = ContractStatus::Defaulted;
        self.modified_date = at;
    }

    /// Marks the contract as terminated before term
    pub fn terminate(&mut self, at: NaiveDateTime) {
        self.status = ContractStatus::Terminated;
        self.modified_date = at;
    }
}
