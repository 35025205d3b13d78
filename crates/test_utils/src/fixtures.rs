//! Deterministic test fixtures
//!
//! Tests pass `now` explicitly everywhere, so fixtures pin instants to
//! known dates instead of reading the wall clock.

use chrono::{NaiveDate, NaiveDateTime};
use core_kernel::{Currency, CustomerId, Money, ReceivableId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Money amounts used across tests
pub struct MoneyFixtures;

impl MoneyFixtures {
    pub fn usd(amount: Decimal) -> Money {
        Money::new(amount, Currency::USD)
    }

    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }

    pub fn monthly_installment() -> Money {
        Self::usd(dec!(389.00))
    }

    pub fn down_payment() -> Money {
        Self::usd(dec!(2500.00))
    }
}

/// Pinned instants used across tests
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// A contract-start style anchor date
    pub fn jan_15_2024() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    /// `days` whole days after the anchor
    pub fn days_after(base: NaiveDateTime, days: i64) -> NaiveDateTime {
        base + chrono::Duration::days(days)
    }
}

/// Identifier helpers
pub struct IdFixtures;

impl IdFixtures {
    pub fn customer_id() -> CustomerId {
        CustomerId::new_v7()
    }

    pub fn receivable_id() -> ReceivableId {
        ReceivableId::new_v7()
    }
}
