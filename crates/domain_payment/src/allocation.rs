//! Payment allocations and split policies
//!
//! An allocation is the portion of one payment applied to one receivable.
//! Each allocation carries a principal/interest/fee split whose parts must
//! sum to the allocation amount. How the split is computed is a policy
//! seam: the shipped default puts everything into principal.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{AllocationId, Money, PaymentId, ReceivableId};

use crate::error::PaymentError;

/// The principal/interest/fee breakdown of an allocation amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationSplit {
    pub principal: Money,
    pub interest: Money,
    pub fee: Money,
}

impl AllocationSplit {
    /// A split assigning the entire amount to principal
    pub fn principal_only(amount: Money) -> Self {
        let zero = Money::zero(amount.currency());
        Self {
            principal: amount,
            interest: zero,
            fee: zero,
        }
    }

    /// Returns the sum of the three parts
    pub fn total(&self) -> Result<Money, PaymentError> {
        Ok(self
            .principal
            .checked_add(&self.interest)?
            .checked_add(&self.fee)?)
    }
}

/// Policy deciding how an allocation amount is split across
/// principal, interest, and fees
pub trait SplitPolicy: Send + Sync {
    fn split(&self, amount: Money) -> Result<AllocationSplit, PaymentError>;
}

/// The current allocation policy: 100% of every allocation is principal
#[derive(Debug, Clone, Copy, Default)]
pub struct PrincipalOnly;

impl SplitPolicy for PrincipalOnly {
    fn split(&self, amount: Money) -> Result<AllocationSplit, PaymentError> {
        Ok(AllocationSplit::principal_only(amount))
    }
}

/// Splits by fixed weights, with principal absorbing the rounding
/// remainder so the parts always sum to the amount
#[derive(Debug, Clone, Copy)]
pub struct WeightedSplit {
    pub interest_weight: Decimal,
    pub fee_weight: Decimal,
    pub principal_weight: Decimal,
}

impl SplitPolicy for WeightedSplit {
    fn split(&self, amount: Money) -> Result<AllocationSplit, PaymentError> {
        let parts = amount.allocate_by_ratios(&[
            self.interest_weight,
            self.fee_weight,
            self.principal_weight,
        ])?;
        Ok(AllocationSplit {
            interest: parts[0],
            fee: parts[1],
            principal: parts[2],
        })
    }
}

/// The portion of one payment applied to one receivable
///
/// Created exactly once per (payment, receivable) pair touched during an
/// allocation run; never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentAllocation {
    /// Unique identifier
    pub id: AllocationId,
    /// Payment the money came from
    pub payment_id: PaymentId,
    /// Receivable the money went to
    pub receivable_id: ReceivableId,
    /// Amount applied
    pub amount: Money,
    /// Principal/interest/fee breakdown of the amount
    pub split: AllocationSplit,
    /// When the allocation was made
    pub allocated_at: NaiveDateTime,
}

impl PaymentAllocation {
    /// Creates an allocation record
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::InvariantViolation` if the split parts do
    /// not sum to the amount.
    pub fn new(
        payment_id: PaymentId,
        receivable_id: ReceivableId,
        amount: Money,
        split: AllocationSplit,
        allocated_at: NaiveDateTime,
    ) -> Result<Self, PaymentError> {
        if split.total()? != amount {
            return Err(PaymentError::InvariantViolation(format!(
                "Allocation split does not sum to amount {}",
                amount
            )));
        }

        Ok(Self {
            id: AllocationId::new_v7(),
            payment_id,
            receivable_id,
            amount,
            split,
            allocated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    fn usd(amount: Decimal) -> Money {
        Money::new(amount, Currency::USD)
    }

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_principal_only_split() {
        let split = PrincipalOnly.split(usd(dec!(120.00))).unwrap();
        assert_eq!(split.principal, usd(dec!(120.00)));
        assert!(split.interest.is_zero());
        assert!(split.fee.is_zero());
        assert_eq!(split.total().unwrap(), usd(dec!(120.00)));
    }

    #[test]
    fn test_weighted_split_sums_to_amount() {
        let policy = WeightedSplit {
            interest_weight: dec!(1),
            fee_weight: dec!(1),
            principal_weight: dec!(8),
        };
        let split = policy.split(usd(dec!(100.01))).unwrap();
        assert_eq!(split.total().unwrap(), usd(dec!(100.01)));
        assert_eq!(split.interest, usd(dec!(10.00)));
        assert_eq!(split.fee, usd(dec!(10.00)));
        assert_eq!(split.principal, usd(dec!(80.01)));
    }

    #[test]
    fn test_allocation_rejects_mismatched_split() {
        let split = AllocationSplit::principal_only(usd(dec!(50.00)));
        let result = PaymentAllocation::new(
            PaymentId::new(),
            ReceivableId::new(),
            usd(dec!(60.00)),
            split,
            at(),
        );
        assert!(matches!(
            result,
            Err(PaymentError::InvariantViolation(_))
        ));
    }
}
