//! Assertion helpers for domain invariants

use domain_payment::PaymentAllocation;
use domain_receivable::Receivable;

/// Asserts `paid + outstanding == original` and a non-negative balance
///
/// This must hold at every observable point in a receivable's life.
pub fn assert_balance_invariant(receivable: &Receivable) {
    let total = receivable
        .paid_amount
        .checked_add(&receivable.outstanding_amount)
        .expect("balance currencies must agree");
    assert_eq!(
        total, receivable.original_amount,
        "paid {} + outstanding {} != original {}",
        receivable.paid_amount, receivable.outstanding_amount, receivable.original_amount
    );
    assert!(
        !receivable.outstanding_amount.is_negative(),
        "outstanding {} went negative",
        receivable.outstanding_amount
    );
    assert_eq!(
        receivable.status.is_paid(),
        receivable.outstanding_amount.is_zero(),
        "paid status must track a zero outstanding balance"
    );
}

/// Asserts the allocation's split parts sum to its amount
pub fn assert_split_sums(allocation: &PaymentAllocation) {
    let total = allocation.split.total().expect("split currencies must agree");
    assert_eq!(
        total, allocation.amount,
        "split does not sum to allocation amount {}",
        allocation.amount
    );
}
