//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type bounding a payroll computation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive date range a payroll is computed over.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::new(
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(period.day_count(), 15);
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Creates a validated pay period.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        let period = Self {
            start_date,
            end_date,
        };
        period.validate()?;
        Ok(period)
    }

    /// Rejects a period whose end precedes its start.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_date < self.start_date {
            return Err(EngineError::InvalidPeriod {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Iterates every calendar date of the period in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start_date
            .iter_days()
            .take_while(move |date| *date <= self.end_date)
    }

    /// Returns the number of calendar days in the period (zero if invalid).
    pub fn day_count(&self) -> i64 {
        ((self.end_date - self.start_date).num_days() + 1).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    /// PP-001: contains_date inclusive bounds
    #[test]
    fn test_contains_date_inclusive_bounds() {
        let period = PayPeriod::new(make_date("2026-01-01"), make_date("2026-01-15")).unwrap();

        assert!(period.contains_date(make_date("2026-01-01")));
        assert!(period.contains_date(make_date("2026-01-08")));
        assert!(period.contains_date(make_date("2026-01-15")));
        assert!(!period.contains_date(make_date("2025-12-31")));
        assert!(!period.contains_date(make_date("2026-01-16")));
    }

    /// PP-002: end before start is rejected
    #[test]
    fn test_end_before_start_is_rejected() {
        let result = PayPeriod::new(make_date("2026-01-15"), make_date("2026-01-01"));

        match result {
            Err(EngineError::InvalidPeriod { start, end }) => {
                assert_eq!(start, make_date("2026-01-15"));
                assert_eq!(end, make_date("2026-01-01"));
            }
            other => panic!("Expected InvalidPeriod, got {:?}", other),
        }
    }

    /// PP-003: single-day period
    #[test]
    fn test_single_day_period() {
        let period = PayPeriod::new(make_date("2026-01-05"), make_date("2026-01-05")).unwrap();
        let days: Vec<NaiveDate> = period.days().collect();
        assert_eq!(days, vec![make_date("2026-01-05")]);
        assert_eq!(period.day_count(), 1);
    }

    #[test]
    fn test_days_cross_month_boundary() {
        let period = PayPeriod::new(make_date("2026-01-30"), make_date("2026-02-02")).unwrap();
        let days: Vec<NaiveDate> = period.days().collect();
        assert_eq!(days.len(), 4);
        assert_eq!(days[0], make_date("2026-01-30"));
        assert_eq!(days[3], make_date("2026-02-02"));
    }

    #[test]
    fn test_deserialized_period_can_be_validated() {
        let json = r#"{ "start_date": "2026-01-16", "end_date": "2026-01-15" }"#;
        let period: PayPeriod = serde_json::from_str(json).unwrap();
        assert!(period.validate().is_err());
        assert_eq!(period.day_count(), 0);
    }
}
