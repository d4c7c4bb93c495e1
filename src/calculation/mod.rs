//! Calculation logic for the payroll engine.
//!
//! This module contains rate resolution, day-type resolution, the slice-based
//! daily classifier, statutory deductions with income tax, and the period
//! orchestration that assembles a [`PeriodPaySummary`](crate::models::PeriodPaySummary).

mod classifier;
mod day_type;
mod deductions;
mod multipliers;
mod payroll;
mod rates;
mod schedule;
mod slices;
mod work_interval;

pub use classifier::{
    CreditTier, DailyAttendance, DayOutcome, REGULAR_HOURS_CAP, SliceCredit, classify_day,
};
pub use day_type::{DayType, resolve_day_type};
pub use deductions::{
    Deductions, HEALTH_INSURANCE_RATE, HOUSING_CONTRIBUTION, SOCIAL_INSURANCE_RATE,
    compute_deductions, income_tax,
};
pub use multipliers::{
    NIGHT_DIFFERENTIAL_PREMIUM, base_multiplier, is_overtime_tier, night_premium, slice_multiplier,
};
pub use payroll::{
    AttendanceTotals, PeriodAttendance, classify_period, compute_pay_summary, summarize,
};
pub use rates::{HOURS_PER_DAY, PayRates, WORKING_DAYS_PER_YEAR, resolve_rates};
pub use schedule::{DaySchedule, OVERTIME_GRACE_HOURS, SCHEDULED_IN_HOUR, SCHEDULED_OUT_HOUR};
pub use slices::{NIGHT_END_HOUR, NIGHT_START_HOUR, SLICE_MINUTES, TimeSlice, is_night_time, partition};
pub use work_interval::{
    BREAK_THRESHOLD_HOURS, UNPAID_BREAK_HOURS, WorkInterval, duration_hours,
};
