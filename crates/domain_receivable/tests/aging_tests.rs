//! Aging engine tests
//!
//! Covers the batch refresh, snapshot accumulation, and the two report
//! flavors (latest snapshot per receivable vs. full history).

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal_macros::dec;

use core_kernel::{Currency, CustomerId, Money};
use domain_receivable::{
    AgingBucketStore, AgingCategory, AgingEngine, PaymentProgress, Receivable,
    ReceivableStore, ReceivableType, Timeliness,
};
use infra_store::{InMemoryAgingBucketStore, InMemoryReceivableStore};

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn usd(amount: rust_decimal::Decimal) -> Money {
    Money::new(amount, Currency::USD)
}

struct Harness {
    receivables: Arc<InMemoryReceivableStore>,
    buckets: Arc<InMemoryAgingBucketStore>,
    engine: AgingEngine,
}

fn harness() -> Harness {
    let receivables = Arc::new(InMemoryReceivableStore::new());
    let buckets = Arc::new(InMemoryAgingBucketStore::new());
    let engine = AgingEngine::new(receivables.clone(), buckets.clone(), Currency::USD);
    Harness {
        receivables,
        buckets,
        engine,
    }
}

fn seed(
    harness: &Harness,
    customer_id: CustomerId,
    amount: Money,
    due: NaiveDateTime,
) -> Receivable {
    let receivable = Receivable::new(
        customer_id,
        ReceivableType::MonthlyPayment,
        amount,
        at(2024, 1, 1),
    )
    .unwrap()
    .with_due_date(due);
    harness.receivables.save(receivable.clone()).unwrap();
    receivable
}

#[test]
fn refresh_sets_aging_days_and_overdue_status() {
    let h = harness();
    let customer = CustomerId::new();
    let receivable = seed(&h, customer, usd(dec!(500)), at(2024, 1, 10));

    let summary = h.engine.refresh(at(2024, 1, 25)).unwrap();
    assert_eq!(summary.refreshed, 1);
    assert_eq!(summary.overdue, 1);

    let after = h.receivables.find_by_id(receivable.id).unwrap().unwrap();
    assert_eq!(after.aging_days, Some(15));
    assert_eq!(after.status.timeliness, Timeliness::Overdue);
    // progress axis untouched: nothing has been paid
    assert_eq!(after.status.progress, PaymentProgress::Pending);
}

#[test]
fn refresh_skips_paid_receivables() {
    let h = harness();
    let customer = CustomerId::new();
    let mut receivable = seed(&h, customer, usd(dec!(500)), at(2024, 1, 10));
    receivable
        .apply_allocation(usd(dec!(500)), at(2024, 1, 5))
        .unwrap();
    h.receivables.save(receivable.clone()).unwrap();

    let summary = h.engine.refresh(at(2024, 3, 1)).unwrap();
    assert_eq!(summary.refreshed, 0);

    assert!(h.buckets.find_all().unwrap().is_empty());
    let after = h.receivables.find_by_id(receivable.id).unwrap().unwrap();
    assert!(after.aging_days.is_none());
}

#[test]
fn refresh_twice_appends_two_buckets() {
    let h = harness();
    let customer = CustomerId::new();
    let receivable = seed(&h, customer, usd(dec!(500)), at(2024, 1, 10));

    h.engine.refresh(at(2024, 1, 20)).unwrap();
    h.engine.refresh(at(2024, 2, 20)).unwrap();

    let buckets = h.buckets.find_by_receivable(receivable.id).unwrap();
    assert_eq!(buckets.len(), 2);

    let mut as_ofs: Vec<_> = buckets.iter().map(|b| b.as_of).collect();
    as_ofs.sort();
    assert_eq!(as_ofs, vec![at(2024, 1, 20), at(2024, 2, 20)]);
}

#[test]
fn category_follows_age_across_runs() {
    let h = harness();
    let customer = CustomerId::new();
    let receivable = seed(&h, customer, usd(dec!(500)), at(2024, 1, 10));

    // 10 days past due
    h.engine.refresh(at(2024, 1, 20)).unwrap();
    // 41 days past due
    h.engine.refresh(at(2024, 2, 20)).unwrap();

    let mut buckets = h.buckets.find_by_receivable(receivable.id).unwrap();
    buckets.sort_by_key(|b| b.as_of);
    assert_eq!(buckets[0].category, AgingCategory::Days1To30);
    assert_eq!(buckets[1].category, AgingCategory::Days31To60);
}

#[test]
fn report_reads_latest_snapshot_per_receivable() {
    let h = harness();
    let customer = CustomerId::new();
    seed(&h, customer, usd(dec!(500)), at(2024, 1, 10));

    h.engine.refresh(at(2024, 1, 20)).unwrap();
    h.engine.refresh(at(2024, 2, 20)).unwrap();

    let report = h.engine.customer_aging_report(customer).unwrap();

    // only the second run's snapshot contributes
    assert_eq!(report.days_31_60, usd(dec!(500)));
    assert!(report.days_1_30.is_zero());
    assert_eq!(report.aged_total().unwrap(), usd(dec!(500)));
    assert_eq!(report.total_outstanding, usd(dec!(500)));
}

#[test]
fn history_sums_every_snapshot_ever_taken() {
    let h = harness();
    let customer = CustomerId::new();
    seed(&h, customer, usd(dec!(500)), at(2024, 1, 10));

    h.engine.refresh(at(2024, 1, 20)).unwrap();
    h.engine.refresh(at(2024, 2, 20)).unwrap();

    let history = h.engine.customer_aging_history(customer).unwrap();

    // both runs contribute: cumulative, not replacing
    assert_eq!(history.days_1_30, usd(dec!(500)));
    assert_eq!(history.days_31_60, usd(dec!(500)));
    assert_eq!(history.aged_total().unwrap(), usd(dec!(1000)));
    // the live balance disagrees with the cumulative sum by design
    assert_eq!(history.total_outstanding, usd(dec!(500)));
}

#[test]
fn report_tracks_paydown_between_runs() {
    let h = harness();
    let customer = CustomerId::new();
    let receivable = seed(&h, customer, usd(dec!(500)), at(2024, 1, 10));

    h.engine.refresh(at(2024, 1, 20)).unwrap();

    let mut partial = h.receivables.find_by_id(receivable.id).unwrap().unwrap();
    partial
        .apply_allocation(usd(dec!(300)), at(2024, 1, 25))
        .unwrap();
    h.receivables.save(partial).unwrap();

    h.engine.refresh(at(2024, 2, 20)).unwrap();

    let report = h.engine.customer_aging_report(customer).unwrap();
    assert_eq!(report.days_31_60, usd(dec!(200)));
    assert!(report.days_1_30.is_zero());
    assert_eq!(report.total_outstanding, usd(dec!(200)));
}

#[test]
fn report_spans_categories_across_receivables() {
    let h = harness();
    let customer = CustomerId::new();
    seed(&h, customer, usd(dec!(100)), at(2024, 1, 10));
    seed(&h, customer, usd(dec!(200)), at(2023, 11, 1));
    seed(&h, customer, usd(dec!(300)), at(2024, 2, 1));

    // other customers never leak into the report
    seed(&h, CustomerId::new(), usd(dec!(999)), at(2024, 1, 10));

    h.engine.refresh(at(2024, 1, 25)).unwrap();

    let report = h.engine.customer_aging_report(customer).unwrap();
    assert_eq!(report.days_1_30, usd(dec!(100)));
    assert_eq!(report.days_61_90, usd(dec!(200)));
    assert_eq!(report.current, usd(dec!(300)));
    assert_eq!(report.total_outstanding, usd(dec!(600)));
}

#[test]
fn outstanding_balance_reads_live_receivables_not_buckets() {
    let h = harness();
    let customer = CustomerId::new();
    let receivable = seed(&h, customer, usd(dec!(500)), at(2024, 1, 10));

    // balance is available before any aging run
    assert_eq!(
        h.engine.customer_outstanding_balance(customer).unwrap(),
        usd(dec!(500))
    );

    let mut paid = h.receivables.find_by_id(receivable.id).unwrap().unwrap();
    paid.apply_allocation(usd(dec!(500)), at(2024, 1, 12)).unwrap();
    h.receivables.save(paid).unwrap();

    assert!(h
        .engine
        .customer_outstanding_balance(customer)
        .unwrap()
        .is_zero());
}

#[test]
fn written_off_receivables_still_age() {
    let h = harness();
    let customer = CustomerId::new();
    let mut receivable = seed(&h, customer, usd(dec!(400)), at(2024, 1, 10));
    receivable.write_off();
    h.receivables.save(receivable.clone()).unwrap();

    let summary = h.engine.refresh(at(2024, 6, 1)).unwrap();
    assert_eq!(summary.refreshed, 1);

    let buckets = h.buckets.find_by_receivable(receivable.id).unwrap();
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].category, AgingCategory::Over120);
}
