//! Temporal helpers for the receivables ledger
//!
//! The ledger's wire format uses timezone-naive local date-times serialized
//! in ISO-8601 extended form (`YYYY-MM-DDTHH:MM:SS`), so entity timestamps
//! across the system are `chrono::NaiveDateTime`. This module provides the
//! day-count arithmetic aging is built on and a validated date range used by
//! store queries.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must not be after end {end}")]
    InvalidPeriod { start: String, end: String },
}

/// Returns the number of whole days elapsed between two instants.
///
/// The count is a floor: 47 hours elapsed is one whole day. Negative when
/// `to` precedes `from`.
pub fn whole_days_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_days()
}

/// An inclusive range of naive date-times, used for due-date and
/// payment-date store queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, TemporalError> {
        if start > end {
            return Err(TemporalError::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Returns true if the instant falls within the range (inclusive)
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant <= self.end
    }

    /// Returns the number of whole days the range spans
    pub fn days(&self) -> i64 {
        whole_days_between(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_whole_days_floor() {
        // 47 hours is one whole day, not two
        assert_eq!(whole_days_between(at(2024, 1, 1, 0), at(2024, 1, 2, 23)), 1);
        assert_eq!(whole_days_between(at(2024, 1, 1, 0), at(2024, 1, 1, 23)), 0);
        assert_eq!(whole_days_between(at(2024, 1, 1, 0), at(2024, 2, 1, 0)), 31);
    }

    #[test]
    fn test_whole_days_negative() {
        assert_eq!(whole_days_between(at(2024, 1, 5, 0), at(2024, 1, 1, 0)), -4);
    }

    #[test]
    fn test_date_range_validation() {
        assert!(DateRange::new(at(2024, 1, 5, 0), at(2024, 1, 1, 0)).is_err());

        let range = DateRange::new(at(2024, 1, 1, 0), at(2024, 1, 31, 0)).unwrap();
        assert!(range.contains(at(2024, 1, 15, 12)));
        assert!(range.contains(at(2024, 1, 1, 0)));
        assert!(range.contains(at(2024, 1, 31, 0)));
        assert!(!range.contains(at(2024, 2, 1, 0)));
        assert_eq!(range.days(), 30);
    }
}
