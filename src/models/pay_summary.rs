//! Period pay summary model.
//!
//! This module contains the [`PeriodPaySummary`] value produced once per
//! (employee, period) computation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The complete pay result of one employee over one period.
///
/// Serializes to a flat JSON object. Currency, hour and minute fields are
/// rounded to 2 decimal places; every other computation happens at full
/// precision before assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodPaySummary {
    /// The employee the summary belongs to.
    pub employee_id: String,
    /// The employee display name.
    pub employee_name: String,
    /// First date of the period (inclusive).
    pub period_start: NaiveDate,
    /// Last date of the period (inclusive).
    pub period_end: NaiveDate,

    /// Monthly salary the rates were derived from.
    pub monthly_salary: Decimal,
    /// Half the monthly salary.
    pub basic_pay: Decimal,
    /// Daily rate on a 313-working-day year.
    pub daily_rate: Decimal,
    /// Daily rate over an 8-hour day.
    pub hourly_rate: Decimal,

    /// Hours credited at a non-overtime tier.
    pub regular_hours: Decimal,
    /// Hours credited at an overtime tier.
    pub overtime_hours: Decimal,
    /// Credited hours whose slice started inside the night window.
    pub night_differential_hours: Decimal,
    /// Minutes clocked in after the scheduled start, ordinary days only.
    pub tardiness_minutes: Decimal,
    /// Minutes clocked out before the scheduled end, ordinary days only.
    pub undertime_minutes: Decimal,
    /// Ordinary days without a complete attendance record.
    pub absences: u32,

    /// Pay earned in non-overtime slices.
    pub regular_pay: Decimal,
    /// Pay earned in overtime slices.
    pub overtime_pay: Decimal,
    /// Night premium earned in credited night slices. Already part of
    /// `regular_pay` and `overtime_pay`, not added to gross again.
    pub night_differential_pay: Decimal,
    /// Sum of all slice pay.
    pub gross_pay: Decimal,

    /// Social insurance contribution (5% of monthly salary).
    pub social_insurance: Decimal,
    /// Health insurance contribution (2.5% of monthly salary).
    pub health_insurance: Decimal,
    /// Fixed housing fund contribution.
    pub housing_contribution: Decimal,
    /// Deduction for tardiness minutes.
    pub lateness_deduction: Decimal,
    /// Deduction for undertime minutes.
    pub undertime_deduction: Decimal,
    /// Deduction for unpaid absences.
    pub absence_deduction: Decimal,
    /// Gross pay less the three statutory contributions.
    pub taxable_income: Decimal,
    /// Progressive income tax on the taxable income.
    pub income_tax: Decimal,
    /// Sum of every deduction above, including income tax.
    pub total_deductions: Decimal,
    /// Gross pay less total deductions. May be negative.
    pub net_pay: Decimal,
}

impl PeriodPaySummary {
    /// Returns true if the deductions exceed the gross pay.
    pub fn has_negative_net_pay(&self) -> bool {
        self.net_pay < Decimal::ZERO
    }
}
