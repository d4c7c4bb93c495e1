//! Work interval normalization.
//!
//! Clock times are combined with the record date into instants. A clock-out
//! earlier than the clock-in ends on the following day. Shifts longer than
//! five hours carry a one-hour unpaid break.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw duration above which the unpaid break is deducted.
pub const BREAK_THRESHOLD_HOURS: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Length of the unpaid break.
pub const UNPAID_BREAK_HOURS: Decimal = Decimal::from_parts(1, 0, 0, false, 0);

const SECONDS_PER_HOUR: Decimal = Decimal::from_parts(3600, 0, 0, false, 0);

/// Converts a duration to fractional hours.
pub fn duration_hours(duration: Duration) -> Decimal {
    Decimal::from(duration.num_seconds()) / SECONDS_PER_HOUR
}

/// A normalized worked interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkInterval {
    /// Clock-in instant.
    pub start: NaiveDateTime,
    /// Clock-out instant, on the next day for overnight shifts.
    pub end: NaiveDateTime,
    /// Hours between clock-in and clock-out.
    pub raw_hours: Decimal,
    /// Unpaid break deducted from the raw hours.
    pub break_hours: Decimal,
    /// Raw hours less the break, never negative.
    pub paid_hours: Decimal,
}

impl WorkInterval {
    /// Normalizes a clock pair on `date`.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::calculation::WorkInterval;
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    ///
    /// let interval = WorkInterval::normalize(
    ///     NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
    ///     NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    ///     NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
    /// );
    /// assert_eq!(interval.end.date(), NaiveDate::from_ymd_opt(2026, 1, 6).unwrap());
    /// assert_eq!(interval.raw_hours, Decimal::new(8, 0));
    /// assert_eq!(interval.paid_hours, Decimal::new(7, 0));
    /// ```
    pub fn normalize(date: NaiveDate, clock_in: NaiveTime, clock_out: NaiveTime) -> Self {
        let start = date.and_time(clock_in);
        let mut end = date.and_time(clock_out);
        if end < start {
            end += Duration::days(1);
        }

        let raw_hours = duration_hours(end - start);
        let break_hours = if raw_hours > BREAK_THRESHOLD_HOURS {
            UNPAID_BREAK_HOURS
        } else {
            Decimal::ZERO
        };
        let paid_hours = (raw_hours - break_hours).max(Decimal::ZERO);

        Self {
            start,
            end,
            raw_hours,
            break_hours,
            paid_hours,
        }
    }
}
