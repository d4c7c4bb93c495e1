//! Fixed-size time slices.
//!
//! A worked interval is partitioned into 15-minute slices anchored at
//! clock-in. The last slice is truncated to the remaining time. A slice is a
//! night slice when it starts at or after 22:00 or before 06:00.

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};
use rust_decimal::Decimal;

use super::work_interval::duration_hours;

/// Length of a full slice in minutes.
pub const SLICE_MINUTES: i64 = 15;

/// First hour of the night window.
pub const NIGHT_START_HOUR: u32 = 22;

/// Hour the night window ends.
pub const NIGHT_END_HOUR: u32 = 6;

/// One slice of a worked interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlice {
    /// Slice start instant.
    pub start: NaiveDateTime,
    /// Slice end instant (exclusive).
    pub end: NaiveDateTime,
    /// Whether the slice started inside the night window.
    pub night: bool,
}

impl TimeSlice {
    fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start,
            end,
            night: is_night_time(start.time()),
        }
    }

    /// Duration of the slice in hours.
    pub fn hours(&self) -> Decimal {
        duration_hours(self.end - self.start)
    }

    /// Splits the slice at `at`. Both halves keep this slice's night flag.
    ///
    /// Returns `None` unless `at` lies strictly inside the slice.
    pub fn split_at(&self, at: NaiveDateTime) -> Option<(TimeSlice, TimeSlice)> {
        if at <= self.start || at >= self.end {
            return None;
        }
        Some((
            TimeSlice {
                end: at,
                ..*self
            },
            TimeSlice {
                start: at,
                ..*self
            },
        ))
    }
}

/// Returns true if `time` is inside the night window.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::is_night_time;
/// use chrono::NaiveTime;
///
/// assert!(is_night_time(NaiveTime::from_hms_opt(22, 0, 0).unwrap()));
/// assert!(is_night_time(NaiveTime::from_hms_opt(5, 45, 0).unwrap()));
/// assert!(!is_night_time(NaiveTime::from_hms_opt(6, 0, 0).unwrap()));
/// assert!(!is_night_time(NaiveTime::from_hms_opt(21, 59, 0).unwrap()));
/// ```
pub fn is_night_time(time: NaiveTime) -> bool {
    time.hour() >= NIGHT_START_HOUR || time.hour() < NIGHT_END_HOUR
}

/// Partitions `[start, end)` into consecutive slices.
pub fn partition(start: NaiveDateTime, end: NaiveDateTime) -> Vec<TimeSlice> {
    let step = Duration::minutes(SLICE_MINUTES);
    let mut slices = Vec::new();
    let mut cursor = start;

    while cursor < end {
        let slice_end = (cursor + step).min(end);
        slices.push(TimeSlice::new(cursor, slice_end));
        cursor = slice_end;
    }

    slices
}
