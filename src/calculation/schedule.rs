//! The organization-wide fixed schedule.
//!
//! Every employee is scheduled 09:00 to 18:00. Overtime on an ordinary day
//! only starts one hour after the scheduled end.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

/// Hour of day the schedule starts.
pub const SCHEDULED_IN_HOUR: i64 = 9;

/// Hour of day the schedule ends.
pub const SCHEDULED_OUT_HOUR: i64 = 18;

/// Hours past the scheduled end before overtime can be credited.
pub const OVERTIME_GRACE_HOURS: i64 = 1;

const SECONDS_PER_MINUTE: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// The schedule instants of one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySchedule {
    /// Scheduled clock-in.
    pub scheduled_in: NaiveDateTime,
    /// Scheduled clock-out.
    pub scheduled_out: NaiveDateTime,
    /// Earliest instant ordinary-day overtime can be credited from.
    pub overtime_boundary: NaiveDateTime,
}

impl DaySchedule {
    /// Builds the schedule instants on `date`.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::calculation::DaySchedule;
    /// use chrono::{NaiveDate, Timelike};
    ///
    /// let schedule = DaySchedule::for_date(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
    /// assert_eq!(schedule.scheduled_in.hour(), 9);
    /// assert_eq!(schedule.overtime_boundary.hour(), 19);
    /// ```
    pub fn for_date(date: NaiveDate) -> Self {
        let midnight = date.and_time(NaiveTime::MIN);

        Self {
            scheduled_in: midnight + Duration::hours(SCHEDULED_IN_HOUR),
            scheduled_out: midnight + Duration::hours(SCHEDULED_OUT_HOUR),
            overtime_boundary: midnight + Duration::hours(SCHEDULED_OUT_HOUR + OVERTIME_GRACE_HOURS),
        }
    }

    /// Minutes `clock_in` is past the scheduled start, zero if on time.
    pub fn tardiness_minutes(&self, clock_in: NaiveDateTime) -> Decimal {
        minutes_between(self.scheduled_in, clock_in)
    }

    /// Minutes `clock_out` is before the scheduled end, zero if on time.
    pub fn undertime_minutes(&self, clock_out: NaiveDateTime) -> Decimal {
        minutes_between(clock_out, self.scheduled_out)
    }
}

fn minutes_between(from: NaiveDateTime, to: NaiveDateTime) -> Decimal {
    let seconds = (to - from).num_seconds().max(0);
    Decimal::from(seconds) / SECONDS_PER_MINUTE
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn schedule() -> DaySchedule {
        DaySchedule::for_date(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap())
    }

    #[test]
    fn test_schedule_instants() {
        let schedule = schedule();
        assert_eq!(schedule.scheduled_in, make_datetime("2026-01-05 09:00:00"));
        assert_eq!(schedule.scheduled_out, make_datetime("2026-01-05 18:00:00"));
        assert_eq!(schedule.overtime_boundary, make_datetime("2026-01-05 19:00:00"));
    }

    #[test]
    fn test_tardiness_after_scheduled_in() {
        let minutes = schedule().tardiness_minutes(make_datetime("2026-01-05 09:30:00"));
        assert_eq!(minutes, dec("30"));
    }

    #[test]
    fn test_early_clock_in_is_not_tardy() {
        let minutes = schedule().tardiness_minutes(make_datetime("2026-01-05 08:15:00"));
        assert_eq!(minutes, Decimal::ZERO);
    }

    #[test]
    fn test_tardiness_keeps_seconds() {
        let minutes = schedule().tardiness_minutes(make_datetime("2026-01-05 09:00:30"));
        assert_eq!(minutes, dec("0.5"));
    }

    #[test]
    fn test_undertime_before_scheduled_out() {
        let minutes = schedule().undertime_minutes(make_datetime("2026-01-05 17:15:00"));
        assert_eq!(minutes, dec("45"));
    }

    #[test]
    fn test_next_day_clock_out_has_no_undertime() {
        let minutes = schedule().undertime_minutes(make_datetime("2026-01-06 02:00:00"));
        assert_eq!(minutes, Decimal::ZERO);
    }
}
