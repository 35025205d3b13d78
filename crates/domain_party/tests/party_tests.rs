//! Tests for the party domain

use chrono::{NaiveDate, NaiveDateTime};
use domain_party::{Address, Customer, CustomerName, CustomerStatus};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap()
}

#[test]
fn customer_builder_chain() {
    let customer = Customer::new(
        CustomerName::Individual {
            first_name: "Dana".into(),
            last_name: "Whitfield".into(),
        },
        "dana.whitfield@example.com",
        now(),
    )
    .unwrap()
    .with_phone("+1-555-0100")
    .with_address(Address::new("100 Main St", "Springfield", "IL", "62701"))
    .with_tax_id("123-45-6789")
    .with_credit_score(712);

    assert_eq!(customer.phone.as_deref(), Some("+1-555-0100"));
    assert_eq!(customer.credit_score, Some(712));
    assert_eq!(customer.name.to_string(), "Dana Whitfield");
}

#[test]
fn customer_name_serde_is_tagged() {
    let name = CustomerName::Business {
        name: "Acme Fleet Services LLC".into(),
    };
    let json = serde_json::to_string(&name).unwrap();
    assert!(json.contains("\"kind\":\"BUSINESS\""));

    let back: CustomerName = serde_json::from_str(&json).unwrap();
    assert_eq!(back, name);
}

#[test]
fn customer_status_lifecycle() {
    let mut customer = Customer::new(
        CustomerName::Business {
            name: "Acme Fleet Services LLC".into(),
        },
        "ap@acmefleet.example",
        now(),
    )
    .unwrap();

    customer.suspend(now());
    assert_eq!(customer.status, CustomerStatus::Suspended);

    customer.close(now());
    assert_eq!(customer.status, CustomerStatus::Closed);
}
