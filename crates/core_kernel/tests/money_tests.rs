//! Integration tests for core_kernel value types

use chrono::NaiveDate;
use core_kernel::{Currency, Money, Rate, ReceivableId};
use rust_decimal_macros::dec;

#[test]
fn money_serializes_amount_as_decimal_string() {
    let m = Money::new(dec!(500.00), Currency::USD);
    let json = serde_json::to_string(&m).unwrap();

    // Decimal must round-trip as a string, never a binary float
    assert!(json.contains("\"500.00\""));

    let back: Money = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
}

#[test]
fn money_deserializes_exact_decimals() {
    let m: Money =
        serde_json::from_str(r#"{"amount":"0.10","currency":"USD"}"#).unwrap();
    let sum = m + m + m;
    assert_eq!(sum.amount(), dec!(0.30));
}

#[test]
fn naive_datetime_uses_iso_8601_extended() {
    let instant = NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap();
    let json = serde_json::to_string(&instant).unwrap();
    assert_eq!(json, "\"2024-03-15T10:30:00\"");
}

#[test]
fn typed_id_round_trips_through_json() {
    let id = ReceivableId::new_v7();
    let json = serde_json::to_string(&id).unwrap();
    let back: ReceivableId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn rate_display_shows_percentage() {
    let rate = Rate::from_percentage(dec!(4.25));
    assert_eq!(rate.to_string(), "4.25%");
    assert_eq!(rate.as_decimal(), dec!(0.0425));
}

#[test]
fn money_display_uses_currency_symbol() {
    let m = Money::new(dec!(1250.5), Currency::USD);
    assert_eq!(m.to_string(), "$ 1250.50");
}
