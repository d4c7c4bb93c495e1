//! Attendance records and the per-period date lookup built from them.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::PayPeriod;

/// An explicit day-type override carried on an attendance record.
///
/// Absence of a tag (`None` on the record) means the day type is resolved
/// from the holiday calendar and the employee's rest day alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayTypeTag {
    /// The date is to be treated as a rest day.
    RestDay,
    /// The date is a special holiday regardless of the calendar.
    SpecialHoliday,
    /// The date is a regular holiday regardless of the calendar.
    RegularHoliday,
}

/// One day of clock-in/clock-out data for an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The calendar date the shift started on.
    pub date: NaiveDate,
    /// Time of clock-in, if recorded.
    #[serde(default)]
    pub clock_in: Option<NaiveTime>,
    /// Time of clock-out, if recorded. Earlier than `clock_in` means the
    /// shift ended on the following day.
    #[serde(default)]
    pub clock_out: Option<NaiveTime>,
    /// Optional explicit day-type override.
    #[serde(default)]
    pub day_type_tag: Option<DayTypeTag>,
}

impl AttendanceRecord {
    /// Returns both clock times when the record is complete.
    ///
    /// A record with only one of the two times is treated exactly like a
    /// missing record.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::AttendanceRecord;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let record = AttendanceRecord {
    ///     employee_id: "emp_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
    ///     clock_in: NaiveTime::from_hms_opt(9, 0, 0),
    ///     clock_out: None,
    ///     day_type_tag: None,
    /// };
    /// assert!(record.clock_pair().is_none());
    /// ```
    pub fn clock_pair(&self) -> Option<(NaiveTime, NaiveTime)> {
        match (self.clock_in, self.clock_out) {
            (Some(clock_in), Some(clock_out)) => Some((clock_in, clock_out)),
            _ => None,
        }
    }
}

/// Attendance records for one employee and one period, keyed by date.
#[derive(Debug, Clone, Default)]
pub struct AttendanceLog<'a> {
    by_date: HashMap<NaiveDate, &'a AttendanceRecord>,
}

impl<'a> AttendanceLog<'a> {
    /// Builds the date lookup for `employee_id` over `period`.
    ///
    /// Records dated outside the period are ignored. A second record for the
    /// same date, or a record that belongs to a different employee, is a
    /// caller contract violation.
    pub fn build(
        employee_id: &str,
        period: &PayPeriod,
        records: &'a [AttendanceRecord],
    ) -> EngineResult<Self> {
        let mut by_date = HashMap::with_capacity(records.len());

        for record in records {
            if record.employee_id != employee_id {
                return Err(EngineError::InvalidAttendanceRecord {
                    date: record.date,
                    message: format!(
                        "record belongs to employee '{}', expected '{}'",
                        record.employee_id, employee_id
                    ),
                });
            }

            if !period.contains_date(record.date) {
                debug!(date = %record.date, "Ignoring attendance record outside pay period");
                continue;
            }

            if by_date.insert(record.date, record).is_some() {
                return Err(EngineError::InvalidAttendanceRecord {
                    date: record.date,
                    message: "more than one record for this date".to_string(),
                });
            }
        }

        Ok(Self { by_date })
    }

    /// Returns the record for `date`, if any.
    pub fn get(&self, date: NaiveDate) -> Option<&'a AttendanceRecord> {
        self.by_date.get(&date).copied()
    }

    /// Returns the number of records inside the period.
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    /// Returns true if no record falls inside the period.
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}
