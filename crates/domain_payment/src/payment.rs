//! Payment records
//!
//! A payment is a sum of money received from a customer. Its amount is
//! immutable once created; status and notes may change as the payment
//! clears, fails, or is reversed.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use core_kernel::{ContractId, CustomerId, Money, PaymentId};

use crate::error::PaymentError;

/// How the money arrived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Check,
    Ach,
    CreditCard,
    DebitCard,
    WireTransfer,
}

/// Payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Received but not yet settled
    Pending,
    /// Settled funds
    Cleared,
    /// Settlement failed (bounced check, declined card)
    Failed,
    /// Settled and later reversed
    Reversed,
}

/// A payment received from a customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier
    pub id: PaymentId,
    /// Customer who paid
    pub customer_id: CustomerId,
    /// Contract the payment was made under, if any
    pub contract_id: Option<ContractId>,
    /// Amount received; immutable once created
    pub amount: Money,
    /// How the money arrived
    pub method: PaymentMethod,
    /// External reference (check number, bank reference)
    pub reference_number: Option<String>,
    /// Status
    pub status: PaymentStatus,
    /// When the payment was received
    pub payment_date: NaiveDateTime,
    /// Operator or channel that recorded the payment
    pub processed_by: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
    /// Created timestamp
    pub created_date: NaiveDateTime,
}

impl Payment {
    /// Creates a new pending payment
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::Validation` if the amount is negative.
    pub fn new(
        customer_id: CustomerId,
        amount: Money,
        method: PaymentMethod,
        payment_date: NaiveDateTime,
    ) -> Result<Self, PaymentError> {
        if amount.is_negative() {
            return Err(PaymentError::Validation(format!(
                "Payment amount must not be negative, got {}",
                amount
            )));
        }

        Ok(Self {
            id: PaymentId::new_v7(),
            customer_id,
            contract_id: None,
            amount,
            method,
            reference_number: None,
            status: PaymentStatus::Pending,
            payment_date,
            processed_by: None,
            notes: None,
            created_date: payment_date,
        })
    }

    /// Ties the payment to a contract
    pub fn with_contract(mut self, contract_id: ContractId) -> Self {
        self.contract_id = Some(contract_id);
        self
    }

    /// Sets the external reference
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference_number = Some(reference.into());
        self
    }

    /// Records who processed the payment
    pub fn with_processed_by(mut self, processed_by: impl Into<String>) -> Self {
        self.processed_by = Some(processed_by.into());
        self
    }

    /// Sets free-form notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Marks the payment as cleared
    pub fn clear(&mut self) {
        self.status = PaymentStatus::Cleared;
    }

    /// Marks the payment as failed
    pub fn fail(&mut self, reason: &str) {
        self.status = PaymentStatus::Failed;
        self.notes = Some(reason.to_string());
    }

    /// Reverses the payment
    pub fn reverse(&mut self, reason: &str) {
        self.status = PaymentStatus::Reversed;
        self.notes = Some(format!("Reversed: {}", reason));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn payment() -> Payment {
        Payment::new(
            CustomerId::new(),
            Money::new(dec!(300.00), Currency::USD),
            PaymentMethod::Ach,
            now(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_payment_is_pending() {
        let p = payment();
        assert_eq!(p.status, PaymentStatus::Pending);
        assert_eq!(p.amount.amount(), dec!(300.00));
        assert!(p.reference_number.is_none());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let result = Payment::new(
            CustomerId::new(),
            Money::new(dec!(-5.00), Currency::USD),
            PaymentMethod::Cash,
            now(),
        );
        assert!(matches!(result, Err(PaymentError::Validation(_))));
    }

    #[test]
    fn test_clear() {
        let mut p = payment();
        p.clear();
        assert_eq!(p.status, PaymentStatus::Cleared);
    }

    #[test]
    fn test_fail_records_reason() {
        let mut p = payment();
        p.fail("Insufficient funds");
        assert_eq!(p.status, PaymentStatus::Failed);
        assert_eq!(p.notes.as_deref(), Some("Insufficient funds"));
    }

    #[test]
    fn test_reverse_records_reason() {
        let mut p = payment();
        p.clear();
        p.reverse("Chargeback");
        assert_eq!(p.status, PaymentStatus::Reversed);
        assert_eq!(p.notes.as_deref(), Some("Reversed: Chargeback"));
    }

    #[test]
    fn test_method_wire_names() {
        let json = serde_json::to_string(&PaymentMethod::WireTransfer).unwrap();
        assert_eq!(json, "\"WIRE_TRANSFER\"");
    }
}
