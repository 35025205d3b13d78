//! Money types with precise decimal arithmetic
//!
//! Monetary values are represented with rust_decimal so that receivable
//! balances and payment allocations never accumulate floating-point error.
//! Amounts are stored exactly as given; callers round for presentation with
//! [`Money::round_to_currency`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub, Neg, Mul};
use thiserror::Error;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
    CAD,
    MXN,
    EUR,
    GBP,
}

impl Currency {
    /// Returns the number of minor-unit digits for this currency.
    ///
    /// Every supported currency uses two minor-unit digits.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::CAD => "C$",
            Currency::MXN => "MX$",
            Currency::EUR => "€",
            Currency::GBP => "£",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::CAD => "CAD",
            Currency::MXN => "MXN",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// A monetary amount with associated currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates Money from an integer amount in minor units (e.g., cents)
    pub fn from_minor(minor_units: i64, currency: Currency) -> Self {
        let divisor = Decimal::new(10_i64.pow(currency.decimal_places()), 0);
        Self::new(Decimal::new(minor_units, 0) / divisor, currency)
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: dec!(0),
            currency,
        }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self {
            amount: self.amount.abs(),
            currency: self.currency,
        }
    }

    /// Rounds to the currency's standard decimal places
    pub fn round_to_currency(&self) -> Self {
        Self {
            amount: self.amount.round_dp(self.currency.decimal_places()),
            currency: self.currency,
        }
    }

    /// Checked addition that returns an error on currency mismatch
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.require_same_currency(other)?;
        Ok(Self::new(self.amount + other.amount, self.currency))
    }

    /// Checked subtraction that returns an error on currency mismatch
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.require_same_currency(other)?;
        Ok(Self::new(self.amount - other.amount, self.currency))
    }

    /// Returns the smaller of two amounts, erroring on currency mismatch.
    ///
    /// This is the clamp used by the allocation waterfall: the amount applied
    /// to a receivable is `min(remaining, outstanding)`.
    pub fn min(&self, other: &Money) -> Result<Money, MoneyError> {
        self.require_same_currency(other)?;
        Ok(Self::new(self.amount.min(other.amount), self.currency))
    }

    /// Multiplies by a scalar (e.g., for rate calculations)
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self::new(self.amount * factor, self.currency)
    }

    /// Allocates money according to given ratios
    ///
    /// Returns allocations in the same order as the ratios. The last
    /// allocation absorbs any rounding remainder so the parts always sum
    /// back to the original amount.
    pub fn allocate_by_ratios(&self, ratios: &[Decimal]) -> Result<Vec<Money>, MoneyError> {
        if ratios.is_empty() {
            return Err(MoneyError::InvalidAmount("Empty ratios".to_string()));
        }

        let total_ratio: Decimal = ratios.iter().sum();
        if total_ratio.is_zero() {
            return Err(MoneyError::InvalidAmount("Total ratio is zero".to_string()));
        }

        let dp = self.currency.decimal_places();
        let mut allocated = Money::zero(self.currency);
        let mut allocations = Vec::with_capacity(ratios.len());

        for (i, ratio) in ratios.iter().enumerate() {
            if i == ratios.len() - 1 {
                let remainder = self.checked_sub(&allocated)?;
                allocations.push(remainder);
            } else {
                let allocation = Self::new(
                    (self.amount * *ratio / total_ratio).round_dp(dp),
                    self.currency,
                );
                allocated = allocated.checked_add(&allocation)?;
                allocations.push(allocation);
            }
        }

        Ok(allocations)
    }

    fn require_same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = self.currency.decimal_places();
        write!(
            f,
            "{} {:.dp$}",
            self.currency.symbol(),
            self.amount,
            dp = dp as usize
        )
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(&other)
            .expect("Currency mismatch in Money::add")
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.checked_sub(&other)
            .expect("Currency mismatch in Money::sub")
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.amount, self.currency)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        self.multiply(factor)
    }
}

/// Represents a percentage rate (e.g., a contract's interest rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    /// The rate as a decimal (e.g., 0.05 for 5%)
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal value (e.g., 0.05 for 5%)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from a percentage (e.g., 5.0 for 5%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// Returns the rate as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the rate as a percentage
    pub fn as_percentage(&self) -> Decimal {
        self.value * dec!(100)
    }

    /// Applies this rate to a money amount
    pub fn apply(&self, money: &Money) -> Money {
        money.multiply(self.value)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().round_dp(4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(dec!(500.00), Currency::USD);
        assert_eq!(m.amount(), dec!(500.00));
        assert_eq!(m.currency(), Currency::USD);
    }

    #[test]
    fn test_money_from_minor() {
        let m = Money::from_minor(10050, Currency::USD);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(dec!(100.00), Currency::USD);
        let b = Money::new(dec!(50.00), Currency::USD);

        assert_eq!((a + b).amount(), dec!(150.00));
        assert_eq!((a - b).amount(), dec!(50.00));
    }

    #[test]
    fn test_money_min_clamps() {
        let remaining = Money::new(dec!(50.00), Currency::USD);
        let outstanding = Money::new(dec!(1000.00), Currency::USD);

        assert_eq!(remaining.min(&outstanding).unwrap(), remaining);
        assert_eq!(outstanding.min(&remaining).unwrap(), remaining);
    }

    #[test]
    fn test_currency_mismatch() {
        let usd = Money::new(dec!(100.00), Currency::USD);
        let cad = Money::new(dec!(100.00), Currency::CAD);

        let result = usd.checked_add(&cad);
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch(_, _))));
        assert!(usd.min(&cad).is_err());
    }

    #[test]
    fn test_negative_and_zero_predicates() {
        assert!(Money::new(dec!(-1), Currency::USD).is_negative());
        assert!(!Money::zero(Currency::USD).is_negative());
        assert!(!Money::zero(Currency::USD).is_positive());
        assert!(Money::new(dec!(0.01), Currency::USD).is_positive());
    }

    #[test]
    fn test_allocation_by_ratios() {
        let m = Money::new(dec!(100.00), Currency::USD);
        let parts = m.allocate_by_ratios(&[dec!(1), dec!(1), dec!(1)]).unwrap();

        assert_eq!(parts.len(), 3);
        let total: Money = parts
            .into_iter()
            .fold(Money::zero(Currency::USD), |acc, p| acc + p);
        assert_eq!(total, m);
    }

    #[test]
    fn test_rate_application() {
        let rate = Rate::from_percentage(dec!(5.0));
        let amount = Money::new(dec!(1000.00), Currency::USD);

        let charge = rate.apply(&amount);
        assert_eq!(charge.amount(), dec!(50.00));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn ratio_allocation_sum_equals_original(
            amount in 1i64..1_000_000_000i64,
            a in 0u32..100u32,
            b in 0u32..100u32,
            c in 1u32..100u32
        ) {
            let money = Money::from_minor(amount, Currency::USD);
            let ratios = [
                Decimal::from(a),
                Decimal::from(b),
                Decimal::from(c),
            ];
            let allocations = money.allocate_by_ratios(&ratios).unwrap();

            let total: Decimal = allocations.iter().map(|m| m.amount()).sum();
            prop_assert_eq!(total, money.amount());
        }

        #[test]
        fn min_never_exceeds_either_operand(
            a in -1_000_000i64..1_000_000i64,
            b in -1_000_000i64..1_000_000i64
        ) {
            let ma = Money::from_minor(a, Currency::USD);
            let mb = Money::from_minor(b, Currency::USD);

            let min = ma.min(&mb).unwrap();
            prop_assert!(min.amount() <= ma.amount());
            prop_assert!(min.amount() <= mb.amount());
        }
    }
}
