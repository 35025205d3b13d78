//! Aging analysis
//!
//! Aging measures how many whole days past due each open receivable is,
//! classifies the outstanding amount into fixed day-count buckets, and
//! appends a dated snapshot per receivable per run. Snapshots accumulate;
//! reports read the latest snapshot per receivable, and the full history
//! stays available for audit.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use core_kernel::{AgingBucketId, Currency, CustomerId, Money, ReceivableId};

use crate::error::ReceivableError;
use crate::ports::{AgingBucketStore, ReceivableStore};
use crate::receivable::Receivable;

/// Day-count classification of an unpaid receivable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgingCategory {
    /// Not yet past due
    #[serde(rename = "CURRENT")]
    Current,
    /// 1 to 30 days past due
    #[serde(rename = "DAYS_1_30")]
    Days1To30,
    /// 31 to 60 days past due
    #[serde(rename = "DAYS_31_60")]
    Days31To60,
    /// 61 to 90 days past due
    #[serde(rename = "DAYS_61_90")]
    Days61To90,
    /// 91 to 120 days past due
    #[serde(rename = "DAYS_91_120")]
    Days91To120,
    /// More than 120 days past due
    #[serde(rename = "OVER_120")]
    Over120,
}

impl AgingCategory {
    /// All categories, in ascending age order
    pub const ALL: [AgingCategory; 6] = [
        AgingCategory::Current,
        AgingCategory::Days1To30,
        AgingCategory::Days31To60,
        AgingCategory::Days61To90,
        AgingCategory::Days91To120,
        AgingCategory::Over120,
    ];

    /// Classifies an age in whole days past due
    pub fn from_days(days: u32) -> Self {
        match days {
            0 => AgingCategory::Current,
            1..=30 => AgingCategory::Days1To30,
            31..=60 => AgingCategory::Days31To60,
            61..=90 => AgingCategory::Days61To90,
            91..=120 => AgingCategory::Days91To120,
            _ => AgingCategory::Over120,
        }
    }
}

/// A point-in-time snapshot of one receivable's outstanding amount
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgingBucket {
    /// Unique identifier
    pub id: AgingBucketId,
    /// Receivable the snapshot was taken of
    pub receivable_id: ReceivableId,
    /// Customer owing the amount
    pub customer_id: CustomerId,
    /// Age classification at snapshot time
    pub category: AgingCategory,
    /// Outstanding amount at snapshot time
    pub amount: Money,
    /// Instant of the aging run that produced this snapshot
    pub as_of: NaiveDateTime,
    /// Created timestamp
    pub created_date: NaiveDateTime,
}

impl AgingBucket {
    /// Snapshots a receivable's outstanding amount under a category
    pub fn snapshot(
        receivable: &Receivable,
        category: AgingCategory,
        as_of: NaiveDateTime,
    ) -> Self {
        Self {
            id: AgingBucketId::new_v7(),
            receivable_id: receivable.id,
            customer_id: receivable.customer_id,
            category,
            amount: receivable.outstanding_amount,
            as_of,
            created_date: as_of,
        }
    }
}

/// Outcome of one aging run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingRunSummary {
    /// Instant the run was taken as of
    pub as_of: NaiveDateTime,
    /// Open receivables refreshed (one bucket appended for each)
    pub refreshed: usize,
    /// How many of those were past due
    pub overdue: usize,
}

/// Per-customer aging report
///
/// One amount per category plus the customer's live outstanding balance.
/// The bucket totals come from snapshots; `total_outstanding` is read from
/// the live receivables and can disagree with a stale snapshot set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgingReport {
    pub customer_id: CustomerId,
    pub current: Money,
    pub days_1_30: Money,
    pub days_31_60: Money,
    pub days_61_90: Money,
    pub days_91_120: Money,
    pub over_120: Money,
    pub total_outstanding: Money,
}

impl AgingReport {
    fn empty(customer_id: CustomerId, currency: Currency) -> Self {
        let zero = Money::zero(currency);
        Self {
            customer_id,
            current: zero,
            days_1_30: zero,
            days_31_60: zero,
            days_61_90: zero,
            days_91_120: zero,
            over_120: zero,
            total_outstanding: zero,
        }
    }

    /// Returns the amount reported under a category
    pub fn category_total(&self, category: AgingCategory) -> Money {
        match category {
            AgingCategory::Current => self.current,
            AgingCategory::Days1To30 => self.days_1_30,
            AgingCategory::Days31To60 => self.days_31_60,
            AgingCategory::Days61To90 => self.days_61_90,
            AgingCategory::Days91To120 => self.days_91_120,
            AgingCategory::Over120 => self.over_120,
        }
    }

    /// Returns the sum across all six categories
    pub fn aged_total(&self) -> Result<Money, ReceivableError> {
        let mut total = Money::zero(self.total_outstanding.currency());
        for category in AgingCategory::ALL {
            total = total.checked_add(&self.category_total(category))?;
        }
        Ok(total)
    }

    fn add(&mut self, category: AgingCategory, amount: Money) -> Result<(), ReceivableError> {
        let slot = match category {
            AgingCategory::Current => &mut self.current,
            AgingCategory::Days1To30 => &mut self.days_1_30,
            AgingCategory::Days31To60 => &mut self.days_31_60,
            AgingCategory::Days61To90 => &mut self.days_61_90,
            AgingCategory::Days91To120 => &mut self.days_91_120,
            AgingCategory::Over120 => &mut self.over_120,
        };
        *slot = slot.checked_add(&amount)?;
        Ok(())
    }
}

/// The aging engine
///
/// Scans the whole receivable portfolio in one batch; there is no
/// incremental mode. Meant to run on a schedule or on demand.
pub struct AgingEngine {
    receivables: Arc<dyn ReceivableStore>,
    buckets: Arc<dyn AgingBucketStore>,
    currency: Currency,
}

impl AgingEngine {
    /// Creates an aging engine over the given stores
    ///
    /// `currency` seeds empty report totals; every receivable in the
    /// portfolio is expected to carry it.
    pub fn new(
        receivables: Arc<dyn ReceivableStore>,
        buckets: Arc<dyn AgingBucketStore>,
        currency: Currency,
    ) -> Self {
        Self {
            receivables,
            buckets,
            currency,
        }
    }

    /// Recomputes aging for every open receivable as of `now`
    ///
    /// For each receivable that is not fully paid: recompute its age in
    /// whole days, recompute the timeliness axis, persist it, and append
    /// an `AgingBucket` snapshot of its outstanding amount. Paid
    /// receivables are skipped entirely; written-off ones still age.
    ///
    /// Each receivable is persisted as it is processed - a failure mid-run
    /// leaves earlier receivables refreshed (at-least-partial semantics).
    pub fn refresh(&self, now: NaiveDateTime) -> Result<AgingRunSummary, ReceivableError> {
        let mut refreshed = 0usize;
        let mut overdue = 0usize;

        for mut receivable in self.receivables.find_all()? {
            if receivable.status.is_paid() {
                continue;
            }

            let days = receivable.age_in_days(now);
            receivable.record_aging(days);

            let category = AgingCategory::from_days(days);
            let bucket = AgingBucket::snapshot(&receivable, category, now);
            debug!(
                receivable = %receivable.id,
                days,
                ?category,
                amount = %bucket.amount,
                "aged receivable"
            );

            self.receivables.save(receivable)?;
            self.buckets.save(bucket)?;

            refreshed += 1;
            if days > 0 {
                overdue += 1;
            }
        }

        info!(%now, refreshed, overdue, "aging refresh complete");
        Ok(AgingRunSummary {
            as_of: now,
            refreshed,
            overdue,
        })
    }

    /// Builds a customer's aging report from the latest snapshot per
    /// receivable
    ///
    /// Only the most recent `as_of` per receivable contributes, so amounts
    /// paid down between runs stop being reported after the next run. The
    /// cumulative sum across every run is available from
    /// [`customer_aging_history`](Self::customer_aging_history).
    pub fn customer_aging_report(
        &self,
        customer_id: CustomerId,
    ) -> Result<AgingReport, ReceivableError> {
        let mut latest: HashMap<ReceivableId, AgingBucket> = HashMap::new();
        for bucket in self.buckets.find_by_customer(customer_id)? {
            match latest.get(&bucket.receivable_id) {
                Some(existing) if existing.as_of >= bucket.as_of => {}
                _ => {
                    latest.insert(bucket.receivable_id, bucket);
                }
            }
        }

        let mut report = AgingReport::empty(customer_id, self.currency);
        for bucket in latest.into_values() {
            report.add(bucket.category, bucket.amount)?;
        }
        report.total_outstanding = self.customer_outstanding_balance(customer_id)?;
        Ok(report)
    }

    /// Sums every snapshot ever taken for the customer, grouped by category
    ///
    /// This is the audit view over the append-only bucket log: a receivable
    /// that appeared in five runs contributes five rows.
    pub fn customer_aging_history(
        &self,
        customer_id: CustomerId,
    ) -> Result<AgingReport, ReceivableError> {
        let mut report = AgingReport::empty(customer_id, self.currency);
        for bucket in self.buckets.find_by_customer(customer_id)? {
            report.add(bucket.category, bucket.amount)?;
        }
        report.total_outstanding = self.customer_outstanding_balance(customer_id)?;
        Ok(report)
    }

    /// Sums the live outstanding balance across the customer's receivables
    ///
    /// Reads current receivable rows, not buckets, so it reflects
    /// allocations made since the last aging run.
    pub fn customer_outstanding_balance(
        &self,
        customer_id: CustomerId,
    ) -> Result<Money, ReceivableError> {
        let mut total = Money::zero(self.currency);
        for receivable in self.receivables.find_by_customer(customer_id)? {
            total = total.checked_add(&receivable.outstanding_amount)?;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_boundaries() {
        assert_eq!(AgingCategory::from_days(0), AgingCategory::Current);
        assert_eq!(AgingCategory::from_days(1), AgingCategory::Days1To30);
        assert_eq!(AgingCategory::from_days(30), AgingCategory::Days1To30);
        assert_eq!(AgingCategory::from_days(31), AgingCategory::Days31To60);
        assert_eq!(AgingCategory::from_days(60), AgingCategory::Days31To60);
        assert_eq!(AgingCategory::from_days(61), AgingCategory::Days61To90);
        assert_eq!(AgingCategory::from_days(90), AgingCategory::Days61To90);
        assert_eq!(AgingCategory::from_days(91), AgingCategory::Days91To120);
        assert_eq!(AgingCategory::from_days(120), AgingCategory::Days91To120);
        assert_eq!(AgingCategory::from_days(121), AgingCategory::Over120);
    }

    #[test]
    fn test_category_wire_names() {
        let json = serde_json::to_string(&AgingCategory::Days1To30).unwrap();
        assert_eq!(json, "\"DAYS_1_30\"");
        let json = serde_json::to_string(&AgingCategory::Over120).unwrap();
        assert_eq!(json, "\"OVER_120\"");
    }
}
