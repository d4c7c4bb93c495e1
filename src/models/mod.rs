//! Core data models for the payroll engine.
//!
//! Inputs ([`Employee`], [`AttendanceRecord`], [`HolidayCalendar`],
//! [`PayPeriod`]) are read-only to the engine; [`PeriodPaySummary`] is the
//! immutable output.

mod attendance;
mod employee;
mod holiday;
mod pay_period;
mod pay_summary;

pub use attendance::{AttendanceLog, AttendanceRecord, DayTypeTag};
pub use employee::{Employee, MAX_MONTHLY_SALARY, parse_weekday, weekday_full_name};
pub use holiday::{Holiday, HolidayCalendar, HolidayKind};
pub use pay_period::PayPeriod;
pub use pay_summary::PeriodPaySummary;
