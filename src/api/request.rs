//! Request types for the payroll API.
//!
//! This module defines the JSON request structures shared by the `/payroll`
//! and `/payroll/breakdown` endpoints, and their conversion to domain types.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, DayTypeTag, Employee, Holiday, HolidayCalendar, HolidayKind, PayPeriod,
    parse_weekday,
};

/// Longest period, in days, a single request may compute.
pub const MAX_PERIOD_DAYS: i64 = 366;

/// Request body for the payroll endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The employee information.
    pub employee: EmployeeRequest,
    /// The period to compute.
    pub period: PeriodRequest,
    /// Attendance records of the employee.
    #[serde(default)]
    pub attendance: Vec<AttendanceRequest>,
    /// Holidays overriding the configured calendar for their dates.
    #[serde(default)]
    pub holidays: Vec<HolidayRequest>,
}

/// Employee information in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Monthly salary.
    pub monthly_salary: Decimal,
    /// Weekday name of the rest day (e.g., "Sunday").
    #[serde(default = "default_rest_day")]
    pub rest_day: String,
}

fn default_rest_day() -> String {
    "Sunday".to_string()
}

/// Period information in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

/// One day of attendance in a payroll request.
///
/// Clock values are `HH:MM` or `HH:MM:SS`; a missing or empty value means the
/// time was not recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// The date of the record.
    pub date: NaiveDate,
    /// Clock-in time.
    #[serde(default)]
    pub clock_in: Option<String>,
    /// Clock-out time.
    #[serde(default)]
    pub clock_out: Option<String>,
    /// `rest_day`, `special_holiday`, `regular_holiday` or `none`.
    #[serde(default)]
    pub day_type: Option<String>,
}

/// Holiday information in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRequest {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    #[serde(default)]
    pub name: String,
    /// `special` or `regular`.
    pub kind: HolidayKind,
}

/// A payroll request converted to domain types.
#[derive(Debug, Clone)]
pub struct PayrollInput {
    /// The employee.
    pub employee: Employee,
    /// The period.
    pub period: PayPeriod,
    /// The attendance records.
    pub records: Vec<AttendanceRecord>,
    /// Holidays supplied with the request.
    pub holidays: HolidayCalendar,
}

impl PayrollInput {
    /// Returns `configured` with the request's holidays laid over it.
    pub fn calendar(&self, configured: &HolidayCalendar) -> HolidayCalendar {
        let mut calendar = configured.clone();
        for holiday in self.holidays.iter() {
            calendar.set(holiday.clone());
        }
        calendar
    }
}

impl TryFrom<PayrollRequest> for PayrollInput {
    type Error = EngineError;

    fn try_from(req: PayrollRequest) -> EngineResult<Self> {
        let period = PayPeriod::from(req.period);
        period.validate()?;
        if period.day_count() > MAX_PERIOD_DAYS {
            return Err(EngineError::PeriodTooLong {
                start: period.start_date,
                end: period.end_date,
                max_days: MAX_PERIOD_DAYS,
            });
        }

        let employee = Employee::try_from(req.employee)?;
        let records = req
            .attendance
            .into_iter()
            .map(|record| record.into_record(&employee.id))
            .collect::<EngineResult<Vec<_>>>()?;
        let holidays = HolidayCalendar::from_holidays(req.holidays.into_iter().map(Into::into))?;

        Ok(Self {
            employee,
            period,
            records,
            holidays,
        })
    }
}

impl TryFrom<EmployeeRequest> for Employee {
    type Error = EngineError;

    fn try_from(req: EmployeeRequest) -> EngineResult<Self> {
        Ok(Employee {
            rest_day: parse_weekday(&req.rest_day)?,
            id: req.id,
            name: req.name,
            monthly_salary: req.monthly_salary,
        })
    }
}

impl From<PeriodRequest> for PayPeriod {
    fn from(req: PeriodRequest) -> Self {
        PayPeriod {
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

impl From<HolidayRequest> for Holiday {
    fn from(req: HolidayRequest) -> Self {
        Holiday {
            date: req.date,
            name: req.name,
            kind: req.kind,
        }
    }
}

impl AttendanceRequest {
    /// Converts the request into a record belonging to `employee_id`.
    pub fn into_record(self, employee_id: &str) -> EngineResult<AttendanceRecord> {
        let date = self.date;
        Ok(AttendanceRecord {
            employee_id: employee_id.to_string(),
            date,
            clock_in: parse_clock(date, self.clock_in.as_deref())?,
            clock_out: parse_clock(date, self.clock_out.as_deref())?,
            day_type_tag: parse_day_type_tag(date, self.day_type.as_deref())?,
        })
    }
}

/// Parses an optional `HH:MM` or `HH:MM:SS` clock value.
fn parse_clock(date: NaiveDate, value: Option<&str>) -> EngineResult<Option<NaiveTime>> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map(Some)
        .map_err(|_| EngineError::InvalidAttendanceRecord {
            date,
            message: format!("'{}' is not a valid clock time", value),
        })
}

fn parse_day_type_tag(date: NaiveDate, value: Option<&str>) -> EngineResult<Option<DayTypeTag>> {
    match value.map(str::trim).unwrap_or_default() {
        "" | "none" => Ok(None),
        "rest_day" => Ok(Some(DayTypeTag::RestDay)),
        "special_holiday" => Ok(Some(DayTypeTag::SpecialHoliday)),
        "regular_holiday" => Ok(Some(DayTypeTag::RegularHoliday)),
        other => Err(EngineError::InvalidAttendanceRecord {
            date,
            message: format!("unknown day type '{}'", other),
        }),
    }
}
