//! The payment allocation engine
//!
//! Distributes one payment's amount across a caller-ordered list of
//! receivables. The engine performs no re-sorting: ordering is the
//! caller's policy lever. Each application is clamped to the receivable's
//! outstanding balance, which is the sole safeguard against
//! over-allocation - the receivable's own invariant check can only trip
//! on a logic defect.
//!
//! Persistence happens per receivable as the waterfall runs. A failure
//! partway through leaves earlier receivables updated and later ones
//! untouched: at-least-partial application, never all-or-nothing.

use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use core_kernel::{Money, ReceivableId};
use domain_receivable::ReceivableStore;

use crate::allocation::{PaymentAllocation, PrincipalOnly, SplitPolicy};
use crate::error::PaymentError;
use crate::locks::ReceivableLocks;
use crate::payment::Payment;
use crate::ports::{AllocationStore, PaymentStore};

/// Result of one allocation run
#[derive(Debug, Clone)]
pub struct AllocationOutcome {
    /// The saved payment
    pub payment: Payment,
    /// Allocation records created, in waterfall order
    pub allocations: Vec<PaymentAllocation>,
    /// Amount left after the waterfall exhausted the list
    ///
    /// The engine does not create a credit balance or refund record for
    /// this; the caller decides what an undistributed remainder means.
    pub unallocated: Money,
}

/// Distributes payments across receivables in caller order
pub struct PaymentAllocationEngine {
    payments: Arc<dyn PaymentStore>,
    allocations: Arc<dyn AllocationStore>,
    receivables: Arc<dyn ReceivableStore>,
    split_policy: Arc<dyn SplitPolicy>,
    locks: ReceivableLocks,
}

impl PaymentAllocationEngine {
    /// Creates an engine with the default principal-only split policy
    pub fn new(
        payments: Arc<dyn PaymentStore>,
        allocations: Arc<dyn AllocationStore>,
        receivables: Arc<dyn ReceivableStore>,
    ) -> Self {
        Self {
            payments,
            allocations,
            receivables,
            split_policy: Arc::new(PrincipalOnly),
            locks: ReceivableLocks::new(),
        }
    }

    /// Replaces the split policy
    pub fn with_split_policy(mut self, policy: Arc<dyn SplitPolicy>) -> Self {
        self.split_policy = policy;
        self
    }

    /// Applies a payment against receivables in the caller-supplied order
    ///
    /// The payment is saved first, then the waterfall runs until the
    /// amount is exhausted or the list ends. For each receivable touched,
    /// the applied amount is `min(remaining, outstanding)`; an allocation
    /// record is created and the receivable's balances updated under that
    /// receivable's lock, so concurrent runs against the same receivable
    /// serialize.
    ///
    /// An empty list saves the payment and creates no allocations. A
    /// missing receivable id fails with `ReceivableNotFound`; allocations
    /// recorded before that point are not rolled back.
    pub fn allocate(
        &self,
        payment: Payment,
        ordered_receivable_ids: &[ReceivableId],
        now: NaiveDateTime,
    ) -> Result<AllocationOutcome, PaymentError> {
        if payment.amount.is_negative() {
            return Err(PaymentError::Validation(format!(
                "Payment amount must not be negative, got {}",
                payment.amount
            )));
        }

        let payment = self.payments.save(payment)?;
        let mut remaining = payment.amount;
        let mut recorded = Vec::new();

        for &receivable_id in ordered_receivable_ids {
            if !remaining.is_positive() {
                break;
            }

            let cell = self.locks.cell(receivable_id);
            let _guard = cell.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

            let mut receivable = self
                .receivables
                .find_by_id(receivable_id)?
                .ok_or(PaymentError::ReceivableNotFound(receivable_id))?;

            let applied = remaining.min(&receivable.outstanding_amount)?;
            let split = self.split_policy.split(applied)?;
            let allocation =
                PaymentAllocation::new(payment.id, receivable_id, applied, split, now)?;

            receivable.apply_allocation(applied, now)?;

            self.allocations.save(allocation.clone())?;
            self.receivables.save(receivable)?;

            remaining = remaining.checked_sub(&applied)?;
            debug!(
                payment = %payment.id,
                receivable = %receivable_id,
                %applied,
                %remaining,
                "allocated"
            );
            recorded.push(allocation);
        }

        if remaining.is_positive() {
            warn!(
                payment = %payment.id,
                %remaining,
                "payment amount not fully allocated"
            );
        }

        Ok(AllocationOutcome {
            payment,
            allocations: recorded,
            unallocated: remaining,
        })
    }
}
