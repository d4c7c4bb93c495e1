//! Period orchestration and summary assembly.
//!
//! [`classify_period`] walks every date of the period once, resolving the day
//! type and classifying the day. [`summarize`] turns the result into a
//! [`PeriodPaySummary`], applying deductions and rounding at the very end.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::EngineResult;
use crate::models::{
    AttendanceLog, AttendanceRecord, Employee, HolidayCalendar, PayPeriod, PeriodPaySummary,
};

use super::classifier::{DailyAttendance, classify_day};
use super::day_type::resolve_day_type;
use super::deductions::{Deductions, compute_deductions};
use super::rates::{PayRates, resolve_rates};

const OUTPUT_DP: u32 = 2;

/// Period totals accumulated from the daily classifications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceTotals {
    /// Hours credited at a non-overtime tier.
    pub regular_hours: Decimal,
    /// Hours credited at an overtime tier.
    pub overtime_hours: Decimal,
    /// Credited night hours.
    pub night_differential_hours: Decimal,
    /// Ordinary-day hours past the regular cap.
    pub uncredited_hours: Decimal,
    /// Minutes late.
    pub tardiness_minutes: Decimal,
    /// Minutes left early.
    pub undertime_minutes: Decimal,
    /// Absent ordinary days.
    pub absences: u32,
    /// Pay from regular-tier credits.
    pub regular_pay: Decimal,
    /// Pay from overtime-tier credits.
    pub overtime_pay: Decimal,
    /// Night premium included in the two tier amounts.
    pub night_differential_pay: Decimal,
    /// All slice pay.
    pub gross_pay: Decimal,
}

impl AttendanceTotals {
    fn add(&mut self, day: &DailyAttendance) {
        self.regular_hours += day.regular_hours;
        self.overtime_hours += day.overtime_hours;
        self.night_differential_hours += day.night_differential_hours;
        self.uncredited_hours += day.uncredited_hours;
        self.tardiness_minutes += day.tardiness_minutes;
        self.undertime_minutes += day.undertime_minutes;
        self.regular_pay += day.regular_pay;
        self.overtime_pay += day.overtime_pay;
        self.night_differential_pay += day.night_differential_pay;
        self.gross_pay += day.gross_pay;
        if day.is_absent() {
            self.absences += 1;
        }
    }
}

/// The daily breakdown of one employee over one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodAttendance {
    /// The employee the breakdown belongs to.
    pub employee_id: String,
    /// The employee display name.
    pub employee_name: String,
    /// The period classified.
    pub period: PayPeriod,
    /// Rates resolved from the monthly salary.
    pub rates: PayRates,
    /// One entry per calendar date in order.
    pub days: Vec<DailyAttendance>,
    /// Totals over `days`.
    pub totals: AttendanceTotals,
}

/// Classifies every day of `period` for `employee`.
///
/// # Errors
///
/// - [`EngineError::InvalidPeriod`](crate::error::EngineError::InvalidPeriod)
///   if the period ends before it starts
/// - [`EngineError::InvalidEmployee`](crate::error::EngineError::InvalidEmployee)
///   for a salary outside `0..=MAX_MONTHLY_SALARY`
/// - [`EngineError::InvalidAttendanceRecord`](crate::error::EngineError::InvalidAttendanceRecord)
///   for duplicate dates or records of another employee
pub fn classify_period(
    employee: &Employee,
    period: &PayPeriod,
    records: &[AttendanceRecord],
    calendar: &HolidayCalendar,
) -> EngineResult<PeriodAttendance> {
    period.validate()?;
    employee.validate()?;

    let log = AttendanceLog::build(&employee.id, period, records)?;
    let rates = resolve_rates(employee.monthly_salary);

    let mut days = Vec::with_capacity(period.day_count().max(0) as usize);
    let mut totals = AttendanceTotals::default();

    for date in period.days() {
        let record = log.get(date);
        let day_type = resolve_day_type(
            date,
            employee.rest_day,
            calendar,
            record.and_then(|r| r.day_type_tag),
        );
        let day = classify_day(date, day_type, record, &rates);

        debug!(
            employee_id = %employee.id,
            date = %date,
            day_type = %day_type,
            holiday = ?calendar.get(date).map(|h| h.name.as_str()),
            outcome = ?day.outcome,
            regular_hours = %day.regular_hours,
            overtime_hours = %day.overtime_hours,
            gross_pay = %day.gross_pay,
            "Classified day"
        );

        totals.add(&day);
        days.push(day);
    }

    Ok(PeriodAttendance {
        employee_id: employee.id.clone(),
        employee_name: employee.name.clone(),
        period: *period,
        rates,
        days,
        totals,
    })
}

/// Assembles the pay summary from a classified period.
pub fn summarize(attendance: &PeriodAttendance) -> PeriodPaySummary {
    let rates = &attendance.rates;
    let totals = &attendance.totals;
    let deductions: Deductions = compute_deductions(
        totals.gross_pay,
        rates,
        totals.tardiness_minutes,
        totals.undertime_minutes,
        totals.absences,
    );
    let total_deductions = deductions.total();
    let net_pay = totals.gross_pay - total_deductions;

    let round = |value: Decimal| value.round_dp(OUTPUT_DP);

    PeriodPaySummary {
        employee_id: attendance.employee_id.clone(),
        employee_name: attendance.employee_name.clone(),
        period_start: attendance.period.start_date,
        period_end: attendance.period.end_date,
        monthly_salary: round(rates.monthly_salary),
        basic_pay: round(rates.basic_pay),
        daily_rate: round(rates.daily_rate),
        hourly_rate: round(rates.hourly_rate),
        regular_hours: round(totals.regular_hours),
        overtime_hours: round(totals.overtime_hours),
        night_differential_hours: round(totals.night_differential_hours),
        tardiness_minutes: round(totals.tardiness_minutes),
        undertime_minutes: round(totals.undertime_minutes),
        absences: totals.absences,
        regular_pay: round(totals.regular_pay),
        overtime_pay: round(totals.overtime_pay),
        night_differential_pay: round(totals.night_differential_pay),
        gross_pay: round(totals.gross_pay),
        social_insurance: round(deductions.social_insurance),
        health_insurance: round(deductions.health_insurance),
        housing_contribution: round(deductions.housing_contribution),
        lateness_deduction: round(deductions.lateness_deduction),
        undertime_deduction: round(deductions.undertime_deduction),
        absence_deduction: round(deductions.absence_deduction),
        taxable_income: round(deductions.taxable_income),
        income_tax: round(deductions.income_tax),
        total_deductions: round(total_deductions),
        net_pay: round(net_pay),
    }
}

/// Computes the pay summary of `employee` over `period`.
///
/// This is a pure function of its inputs: the same inputs always produce
/// the same summary.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::compute_pay_summary;
/// use payroll_engine::models::{AttendanceRecord, Employee, HolidayCalendar, PayPeriod};
/// use chrono::{NaiveDate, NaiveTime, Weekday};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Maria Santos".to_string(),
///     monthly_salary: Decimal::new(15700, 0),
///     rest_day: Weekday::Sun,
/// };
/// let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
/// let period = PayPeriod::new(date, date).unwrap();
/// let records = vec![AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     date,
///     clock_in: NaiveTime::from_hms_opt(9, 0, 0),
///     clock_out: NaiveTime::from_hms_opt(18, 0, 0),
///     day_type_tag: None,
/// }];
///
/// let summary =
///     compute_pay_summary(&employee, &period, &records, &HolidayCalendar::new()).unwrap();
/// assert_eq!(summary.regular_hours, Decimal::new(8, 0));
/// assert_eq!(summary.gross_pay, Decimal::new(60192, 2));
/// ```
pub fn compute_pay_summary(
    employee: &Employee,
    period: &PayPeriod,
    records: &[AttendanceRecord],
    calendar: &HolidayCalendar,
) -> EngineResult<PeriodPaySummary> {
    let attendance = classify_period(employee, period, records, calendar)?;
    let summary = summarize(&attendance);

    info!(
        employee_id = %summary.employee_id,
        period_start = %summary.period_start,
        period_end = %summary.period_end,
        absences = summary.absences,
        gross_pay = %summary.gross_pay,
        net_pay = %summary.net_pay,
        "Computed pay summary"
    );
    if summary.has_negative_net_pay() {
        warn!(
            employee_id = %summary.employee_id,
            net_pay = %summary.net_pay,
            total_deductions = %summary.total_deductions,
            "Deductions exceed gross pay"
        );
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{DayOutcome, DayType};
    use crate::error::EngineError;
    use crate::models::{DayTypeTag, Holiday, HolidayKind, MAX_MONTHLY_SALARY};
    use chrono::{NaiveDate, NaiveTime, Weekday};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M").unwrap()
    }

    fn create_test_employee() -> Employee {
        Employee {
            id: "emp_001".to_string(),
            name: "Maria Santos".to_string(),
            monthly_salary: dec("15700"),
            rest_day: Weekday::Sun,
        }
    }

    fn record(date: &str, clock_in: &str, clock_out: &str) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: "emp_001".to_string(),
            date: make_date(date),
            clock_in: Some(make_time(clock_in)),
            clock_out: Some(make_time(clock_out)),
            day_type_tag: None,
        }
    }

    /// Monday 2026-01-05 to Sunday 2026-01-11.
    fn week() -> PayPeriod {
        PayPeriod::new(make_date("2026-01-05"), make_date("2026-01-11")).unwrap()
    }

    fn month() -> PayPeriod {
        PayPeriod::new(make_date("2026-01-01"), make_date("2026-01-31")).unwrap()
    }

    /// 06:00 to 05:45 the next morning on every day of January 2026.
    fn overnight_month() -> Vec<AttendanceRecord> {
        month()
            .days()
            .map(|date| record(&date.to_string(), "06:00", "05:45"))
            .collect()
    }

    fn full_week_records() -> Vec<AttendanceRecord> {
        [
            "2026-01-05",
            "2026-01-06",
            "2026-01-07",
            "2026-01-08",
            "2026-01-09",
            "2026-01-10",
        ]
        .iter()
        .map(|date| record(date, "09:00", "18:00"))
        .collect()
    }

    // ==========================================================================
    // PS-001: full week without exceptions
    // ==========================================================================
    #[test]
    fn test_ps_001_full_week_summary() {
        let summary = compute_pay_summary(
            &create_test_employee(),
            &week(),
            &full_week_records(),
            &HolidayCalendar::new(),
        )
        .unwrap();

        assert_eq!(summary.basic_pay, dec("7850.00"));
        assert_eq!(summary.daily_rate, dec("601.92"));
        assert_eq!(summary.hourly_rate, dec("75.24"));
        assert_eq!(summary.regular_hours, dec("48.00"));
        assert_eq!(summary.overtime_hours, Decimal::ZERO);
        assert_eq!(summary.night_differential_hours, Decimal::ZERO);
        assert_eq!(summary.absences, 0);
        assert_eq!(summary.gross_pay, dec("3611.50"));
        assert_eq!(summary.regular_pay, dec("3611.50"));
        assert_eq!(summary.social_insurance, dec("785.00"));
        assert_eq!(summary.health_insurance, dec("392.50"));
        assert_eq!(summary.housing_contribution, dec("200.00"));
        assert_eq!(summary.taxable_income, dec("2234.00"));
        assert_eq!(summary.income_tax, Decimal::ZERO);
        assert_eq!(summary.total_deductions, dec("1377.50"));
        assert_eq!(summary.net_pay, dec("2234.00"));
    }

    // ==========================================================================
    // PS-002: absences on ordinary days only
    // ==========================================================================
    #[test]
    fn test_ps_002_missing_weekdays_are_absences() {
        let mut records = full_week_records();
        records.retain(|r| r.date != make_date("2026-01-07") && r.date != make_date("2026-01-08"));

        let attendance = classify_period(
            &create_test_employee(),
            &week(),
            &records,
            &HolidayCalendar::new(),
        )
        .unwrap();

        assert_eq!(attendance.totals.absences, 2);
        assert_eq!(attendance.days.len(), 7);
        // Sunday rest day without a record is not an absence
        assert_eq!(attendance.days[6].outcome, DayOutcome::NotScheduled);

        let summary = summarize(&attendance);
        assert_eq!(summary.absence_deduction, dec("1203.83"));
        assert_eq!(summary.regular_hours, dec("32.00"));
    }

    #[test]
    fn test_tardiness_and_undertime_accumulate() {
        let mut records = full_week_records();
        records[0] = record("2026-01-05", "09:30", "18:00");
        records[1] = record("2026-01-06", "09:15", "17:30");

        let summary = compute_pay_summary(
            &create_test_employee(),
            &week(),
            &records,
            &HolidayCalendar::new(),
        )
        .unwrap();

        assert_eq!(summary.tardiness_minutes, dec("45.00"));
        assert_eq!(summary.undertime_minutes, dec("30.00"));
        // 45 minutes at 75.2396...
        assert_eq!(summary.lateness_deduction, dec("56.43"));
        assert_eq!(summary.undertime_deduction, dec("37.62"));
    }

    #[test]
    fn test_holiday_calendar_and_rest_day_work() {
        let calendar = HolidayCalendar::from_holidays(vec![Holiday {
            date: make_date("2026-01-09"),
            name: "Special Day".to_string(),
            kind: HolidayKind::Special,
        }])
        .unwrap();
        let mut records = full_week_records();
        records.push(record("2026-01-11", "09:00", "18:00"));

        let attendance =
            classify_period(&create_test_employee(), &week(), &records, &calendar).unwrap();

        assert_eq!(attendance.days[4].day_type, DayType::SpecialHoliday);
        assert_eq!(attendance.days[6].day_type, DayType::RestDay);
        assert_eq!(attendance.totals.regular_hours, dec("56"));

        let rates = attendance.rates;
        let expected = rates.hourly_rate * dec("8") * (dec("5") + dec("1.30") + dec("1.30"));
        let diff = (attendance.totals.gross_pay - expected).abs();
        assert!(diff < dec("0.000001"));
    }

    #[test]
    fn test_day_type_tag_overrides_calendar() {
        let mut records = full_week_records();
        records[2].day_type_tag = Some(DayTypeTag::RegularHoliday);

        let attendance = classify_period(
            &create_test_employee(),
            &week(),
            &records,
            &HolidayCalendar::new(),
        )
        .unwrap();

        assert_eq!(attendance.days[2].day_type, DayType::RegularHoliday);
        assert!(attendance.days[2].slices.iter().all(|s| s.multiplier == dec("2.00")));
    }

    #[test]
    fn test_holiday_without_record_is_not_an_absence() {
        let calendar = HolidayCalendar::from_holidays(vec![Holiday {
            date: make_date("2026-01-06"),
            name: "Regular Day".to_string(),
            kind: HolidayKind::Regular,
        }])
        .unwrap();
        let mut records = full_week_records();
        records.retain(|r| r.date != make_date("2026-01-06"));

        let summary =
            compute_pay_summary(&create_test_employee(), &week(), &records, &calendar).unwrap();
        assert_eq!(summary.absences, 0);
    }

    #[test]
    fn test_records_outside_period_are_ignored() {
        let mut records = full_week_records();
        records.push(record("2026-01-12", "09:00", "18:00"));

        let summary = compute_pay_summary(
            &create_test_employee(),
            &week(),
            &records,
            &HolidayCalendar::new(),
        )
        .unwrap();
        assert_eq!(summary.regular_hours, dec("48.00"));
    }

    #[test]
    fn test_no_attendance_yields_negative_net_pay() {
        let summary = compute_pay_summary(
            &create_test_employee(),
            &week(),
            &[],
            &HolidayCalendar::new(),
        )
        .unwrap();

        assert_eq!(summary.absences, 6);
        assert_eq!(summary.gross_pay, Decimal::ZERO);
        assert!(summary.has_negative_net_pay());
        assert_eq!(summary.net_pay, -summary.total_deductions);
    }

    #[test]
    fn test_invalid_period_is_rejected() {
        let period = PayPeriod {
            start_date: make_date("2026-01-11"),
            end_date: make_date("2026-01-05"),
        };
        let result = compute_pay_summary(
            &create_test_employee(),
            &period,
            &[],
            &HolidayCalendar::new(),
        );
        assert!(matches!(result, Err(EngineError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_negative_salary_is_rejected() {
        let mut employee = create_test_employee();
        employee.monthly_salary = dec("-100");
        let result = compute_pay_summary(&employee, &week(), &[], &HolidayCalendar::new());
        assert!(matches!(result, Err(EngineError::InvalidEmployee { .. })));
    }

    #[test]
    fn test_salary_above_bound_is_rejected() {
        let mut employee = create_test_employee();
        employee.monthly_salary = Decimal::MAX;

        let result = compute_pay_summary(&employee, &month(), &overnight_month(), &HolidayCalendar::new());
        match result {
            Err(EngineError::InvalidEmployee { field, .. }) => assert_eq!(field, "monthly_salary"),
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_largest_salary_over_long_shifts_completes() {
        let mut employee = create_test_employee();
        employee.monthly_salary = MAX_MONTHLY_SALARY;

        let summary =
            compute_pay_summary(&employee, &month(), &overnight_month(), &HolidayCalendar::new())
                .unwrap();
        assert_eq!(summary.absences, 0);
        assert!(summary.gross_pay > Decimal::ZERO);
        assert!(summary.night_differential_pay > Decimal::ZERO);
    }

    #[test]
    fn test_night_differential_pay_is_summed_and_rounded() {
        let records = vec![record("2026-01-05", "14:00", "23:00")];
        let period = PayPeriod::new(make_date("2026-01-05"), make_date("2026-01-05")).unwrap();

        let attendance =
            classify_period(&create_test_employee(), &period, &records, &HolidayCalendar::new())
                .unwrap();
        assert_eq!(
            attendance.totals.night_differential_pay,
            attendance.days[0].night_differential_pay
        );

        // 1 night overtime hour: 75.2396... * 1.25 * 0.10
        let summary = summarize(&attendance);
        assert_eq!(summary.night_differential_pay, dec("9.40"));
        assert!(summary.night_differential_pay < summary.overtime_pay);
    }

    #[test]
    fn test_recomputation_is_identical() {
        let employee = create_test_employee();
        let records = full_week_records();
        let calendar = HolidayCalendar::new();

        let first = compute_pay_summary(&employee, &week(), &records, &calendar).unwrap();
        let second = compute_pay_summary(&employee, &week(), &records, &calendar).unwrap();
        assert_eq!(first, second);
    }
}
