//! Receivable entity and lifecycle
//!
//! A receivable is created with its full amount outstanding and nothing
//! paid. The payment allocation engine is the only writer of its balances;
//! the aging engine is the only writer of its age. Both go through the
//! methods here so the balance invariant holds at every observable point.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{whole_days_between, ContractId, CustomerId, Money, ReceivableId};

use crate::error::ReceivableError;

/// The kind of charge a receivable represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReceivableType {
    /// Scheduled installment under a lease or loan
    MonthlyPayment,
    /// Down payment due at contract start
    DownPayment,
    /// Fee assessed for a late installment
    LateFee,
    /// Mileage beyond the contract limit
    ExcessMileage,
    /// Damage assessed at vehicle return
    DamageFee,
    /// Fee for terminating the contract early
    EarlyTermination,
    /// Anything else
    Other,
}

/// How far payment has progressed against the receivable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentProgress {
    /// Nothing applied yet
    Pending,
    /// Some, but not all, of the amount applied
    Partial,
    /// Fully satisfied
    Paid,
    /// Abandoned as uncollectible; balances are kept for audit
    WrittenOff,
}

/// Whether the receivable is past due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Timeliness {
    /// Not past due (or not yet aged)
    Current,
    /// At least one whole day past the due date
    Overdue,
}

/// Receivable status as two independent axes
///
/// Payment progress and timeliness are separate facts: a receivable can be
/// partially paid and overdue at the same time, and an aging run never
/// erases partial-payment information. A paid receivable is always current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceivableStatus {
    pub progress: PaymentProgress,
    pub timeliness: Timeliness,
}

impl ReceivableStatus {
    /// The status of a freshly created receivable
    pub fn new() -> Self {
        Self {
            progress: PaymentProgress::Pending,
            timeliness: Timeliness::Current,
        }
    }

    /// Returns true if the receivable is fully satisfied
    pub fn is_paid(&self) -> bool {
        self.progress == PaymentProgress::Paid
    }

    /// Returns true if the receivable is past due
    pub fn is_overdue(&self) -> bool {
        self.timeliness == Timeliness::Overdue
    }
}

impl Default for ReceivableStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReceivableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = match self.progress {
            PaymentProgress::Pending => "PENDING",
            PaymentProgress::Partial => "PARTIAL",
            PaymentProgress::Paid => "PAID",
            PaymentProgress::WrittenOff => "WRITTEN_OFF",
        };
        let timeliness = match self.timeliness {
            Timeliness::Current => "CURRENT",
            Timeliness::Overdue => "OVERDUE",
        };
        write!(f, "{}/{}", progress, timeliness)
    }
}

/// An amount owed by a customer, tied to at most one contract
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receivable {
    /// Unique identifier
    pub id: ReceivableId,
    /// Contract this charge arises from, if any
    pub contract_id: Option<ContractId>,
    /// Customer who owes the amount
    pub customer_id: CustomerId,
    /// Kind of charge
    pub receivable_type: ReceivableType,
    /// When payment is due
    pub due_date: Option<NaiveDateTime>,
    /// Amount at creation; never changes afterwards
    pub original_amount: Money,
    /// Amount still owed; decreases monotonically toward zero
    pub outstanding_amount: Money,
    /// Amount applied so far; increases monotonically from zero
    pub paid_amount: Money,
    /// Status pair (progress, timeliness)
    pub status: ReceivableStatus,
    /// Invoice number, if billed
    pub invoice_number: Option<String>,
    /// Free-form description
    pub description: Option<String>,
    /// Days past due as of the last aging run; None until first aged
    pub aging_days: Option<u32>,
    /// Created timestamp
    pub created_date: NaiveDateTime,
    /// When the receivable became fully paid
    pub paid_date: Option<NaiveDateTime>,
}

impl Receivable {
    /// Creates a new receivable with the full amount outstanding
    ///
    /// # Errors
    ///
    /// Returns `ReceivableError::Validation` if the original amount is
    /// negative.
    pub fn new(
        customer_id: CustomerId,
        receivable_type: ReceivableType,
        original_amount: Money,
        created_at: NaiveDateTime,
    ) -> Result<Self, ReceivableError> {
        if original_amount.is_negative() {
            return Err(ReceivableError::Validation(format!(
                "Original amount must not be negative, got {}",
                original_amount
            )));
        }

        Ok(Self {
            id: ReceivableId::new_v7(),
            contract_id: None,
            customer_id,
            receivable_type,
            due_date: None,
            original_amount,
            outstanding_amount: original_amount,
            paid_amount: Money::zero(original_amount.currency()),
            status: ReceivableStatus::new(),
            invoice_number: None,
            description: None,
            aging_days: None,
            created_date: created_at,
            paid_date: None,
        })
    }

    /// Ties the receivable to a contract
    pub fn with_contract(mut self, contract_id: ContractId) -> Self {
        self.contract_id = Some(contract_id);
        self
    }

    /// Sets the due date
    pub fn with_due_date(mut self, due_date: NaiveDateTime) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the invoice number
    pub fn with_invoice_number(mut self, invoice_number: impl Into<String>) -> Self {
        self.invoice_number = Some(invoice_number.into());
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Applies an allocation amount against the outstanding balance
    ///
    /// The allocation engine clamps the amount to the outstanding balance
    /// before calling this, so an amount above outstanding here means a
    /// logic defect upstream and fails with `InvariantViolation`.
    ///
    /// When the balance reaches zero the receivable becomes paid (and
    /// current - a paid receivable cannot be overdue) with `paid_date` set
    /// to the allocation time. A partial balance flips progress to partial
    /// and leaves the timeliness axis alone.
    pub fn apply_allocation(
        &mut self,
        amount: Money,
        at: NaiveDateTime,
    ) -> Result<(), ReceivableError> {
        if amount.is_negative() {
            return Err(ReceivableError::InvariantViolation(format!(
                "Allocation amount {} is negative",
                amount
            )));
        }

        let new_outstanding = self.outstanding_amount.checked_sub(&amount)?;
        if new_outstanding.is_negative() {
            return Err(ReceivableError::InvariantViolation(format!(
                "Allocation {} exceeds outstanding {}",
                amount, self.outstanding_amount
            )));
        }

        self.paid_amount = self.paid_amount.checked_add(&amount)?;
        self.outstanding_amount = new_outstanding;

        if self.outstanding_amount.is_zero() {
            self.status.progress = PaymentProgress::Paid;
            self.status.timeliness = Timeliness::Current;
            if self.paid_date.is_none() {
                self.paid_date = Some(at);
            }
        } else if self.outstanding_amount.amount() < self.original_amount.amount() {
            self.status.progress = PaymentProgress::Partial;
        }

        Ok(())
    }

    /// Abandons the receivable as uncollectible
    ///
    /// Balances are left intact for audit; the receivable keeps aging.
    pub fn write_off(&mut self) {
        self.status.progress = PaymentProgress::WrittenOff;
    }

    /// Returns the whole days elapsed past the due date
    ///
    /// Zero when there is no due date, the receivable is paid, or the due
    /// date has not passed. The count is a floor, never rounded up.
    pub fn age_in_days(&self, now: NaiveDateTime) -> u32 {
        let Some(due) = self.due_date else {
            return 0;
        };
        if self.status.is_paid() || now <= due {
            return 0;
        }
        whole_days_between(due, now).max(0) as u32
    }

    /// Returns true if the receivable is at least one whole day past due
    /// and not fully paid
    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        self.age_in_days(now) > 0
    }

    /// Records the result of an aging run
    ///
    /// Sets `aging_days` and recomputes the timeliness axis; payment
    /// progress is untouched.
    pub fn record_aging(&mut self, days: u32) {
        self.aging_days = Some(days);
        if !self.status.is_paid() {
            self.status.timeliness = if days > 0 {
                Timeliness::Overdue
            } else {
                Timeliness::Current
            };
        }
    }
}
