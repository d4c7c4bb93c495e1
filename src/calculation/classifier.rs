//! Daily attendance classification.
//!
//! One calendar day with its resolved [`DayType`] and attendance record is
//! turned into a [`DailyAttendance`]: the day's hours, minutes and pay, plus
//! every [`SliceCredit`] that produced them.
//!
//! ## Crediting rules
//!
//! - The unpaid break is taken pro rata out of the slices before the overtime
//!   boundary (19:00 on ordinary days, none otherwise). Any part of the break
//!   those slices cannot absorb comes out of the overtime slices.
//! - Slices before the boundary earn the non-overtime tier up to 8 effective
//!   hours, in chronological order. A slice crossing the 8-hour mark is split
//!   at the exact instant.
//! - Past the 8-hour mark, ordinary days earn nothing (uncredited) while rest
//!   days and holidays earn the overtime tier.
//! - Slices after the 19:00 boundary always earn the overtime tier.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::models::AttendanceRecord;

use super::multipliers::{night_premium, slice_multiplier};
use super::rates::{HOURS_PER_DAY, PayRates};
use super::schedule::DaySchedule;
use super::slices::{TimeSlice, partition};
use super::work_interval::WorkInterval;
use super::DayType;

/// Effective hours per day credited at the non-overtime tier.
pub const REGULAR_HOURS_CAP: Decimal = HOURS_PER_DAY;

// Scaled slice hours are held at a fixed scale so that their sums stay exact.
const EFFECTIVE_HOURS_DP: u32 = 12;

/// What happened on a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOutcome {
    /// A complete attendance record was classified.
    Worked,
    /// An ordinary day without a complete attendance record.
    Absent,
    /// A rest day or holiday without a complete attendance record.
    NotScheduled,
}

/// The tier a piece of worked time was credited at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditTier {
    /// Non-overtime multiplier.
    Regular,
    /// Overtime multiplier.
    Overtime,
    /// Ordinary-day time past the regular cap and before 19:00. Unpaid.
    Uncredited,
}

/// One credited piece of a slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceCredit {
    /// Start of the credited clock time.
    pub start: NaiveDateTime,
    /// End of the credited clock time.
    pub end: NaiveDateTime,
    /// Effective hours after the break deduction.
    pub hours: Decimal,
    /// The tier the hours were credited at.
    pub tier: CreditTier,
    /// Whether the originating slice started inside the night window.
    pub night_differential: bool,
    /// Final multiplier including the night premium. Zero when uncredited.
    pub multiplier: Decimal,
    /// `hourly_rate * multiplier * hours`.
    pub amount: Decimal,
    /// The part of `amount` earned by the night premium.
    pub night_differential_pay: Decimal,
}

/// The classification of a single calendar day at full precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAttendance {
    /// The calendar date.
    pub date: NaiveDate,
    /// The resolved day type.
    pub day_type: DayType,
    /// Worked, absent or not scheduled.
    pub outcome: DayOutcome,
    /// Normalized clock-in, when worked.
    pub clock_in: Option<NaiveDateTime>,
    /// Normalized clock-out, when worked.
    pub clock_out: Option<NaiveDateTime>,
    /// Hours between clock-in and clock-out.
    pub raw_hours: Decimal,
    /// Unpaid break deducted.
    pub break_hours: Decimal,
    /// Raw hours less the break.
    pub paid_hours: Decimal,
    /// Hours credited at the non-overtime tier.
    pub regular_hours: Decimal,
    /// Hours credited at the overtime tier.
    pub overtime_hours: Decimal,
    /// Credited hours from night slices.
    pub night_differential_hours: Decimal,
    /// Ordinary-day hours past the regular cap that earn nothing.
    pub uncredited_hours: Decimal,
    /// Minutes late, ordinary days only.
    pub tardiness_minutes: Decimal,
    /// Minutes left early, ordinary days only.
    pub undertime_minutes: Decimal,
    /// Pay from regular-tier credits.
    pub regular_pay: Decimal,
    /// Pay from overtime-tier credits.
    pub overtime_pay: Decimal,
    /// Night premium earned, already included in the two tier amounts.
    pub night_differential_pay: Decimal,
    /// Total pay for the day.
    pub gross_pay: Decimal,
    /// Every credited piece in chronological order.
    pub slices: Vec<SliceCredit>,
}

impl DailyAttendance {
    fn empty(date: NaiveDate, day_type: DayType, outcome: DayOutcome) -> Self {
        Self {
            date,
            day_type,
            outcome,
            clock_in: None,
            clock_out: None,
            raw_hours: Decimal::ZERO,
            break_hours: Decimal::ZERO,
            paid_hours: Decimal::ZERO,
            regular_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            night_differential_hours: Decimal::ZERO,
            uncredited_hours: Decimal::ZERO,
            tardiness_minutes: Decimal::ZERO,
            undertime_minutes: Decimal::ZERO,
            regular_pay: Decimal::ZERO,
            overtime_pay: Decimal::ZERO,
            night_differential_pay: Decimal::ZERO,
            gross_pay: Decimal::ZERO,
            slices: Vec::new(),
        }
    }

    /// Returns true if the day counts as an absence.
    pub fn is_absent(&self) -> bool {
        self.outcome == DayOutcome::Absent
    }

    /// Sum of the effective hours of every slice credit.
    pub fn credited_slice_hours(&self) -> Decimal {
        self.slices.iter().map(|s| s.hours).sum()
    }

    fn record(&mut self, credit: SliceCredit) {
        match credit.tier {
            CreditTier::Regular => {
                self.regular_hours += credit.hours;
                self.regular_pay += credit.amount;
            }
            CreditTier::Overtime => {
                self.overtime_hours += credit.hours;
                self.overtime_pay += credit.amount;
            }
            CreditTier::Uncredited => self.uncredited_hours += credit.hours,
        }
        if credit.night_differential && credit.tier != CreditTier::Uncredited {
            self.night_differential_hours += credit.hours;
            self.night_differential_pay += credit.night_differential_pay;
        }
        self.gross_pay += credit.amount;
        self.slices.push(credit);
    }
}

#[derive(Debug, Clone, Copy)]
struct EffectiveSlice {
    slice: TimeSlice,
    hours: Decimal,
}

/// Classifies one calendar day.
///
/// A missing record, or one with only one clock time, is an absence on an
/// ordinary day and simply not scheduled on any other day type.
///
/// # Arguments
///
/// * `date` - The calendar date
/// * `day_type` - The day type resolved for `date`
/// * `record` - The attendance record for `date`, if any
/// * `rates` - The employee's resolved pay rates
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{DayOutcome, DayType, classify_day, resolve_rates};
/// use payroll_engine::models::AttendanceRecord;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
/// let record = AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     date,
///     clock_in: NaiveTime::from_hms_opt(9, 0, 0),
///     clock_out: NaiveTime::from_hms_opt(18, 0, 0),
///     day_type_tag: None,
/// };
///
/// let rates = resolve_rates(Decimal::new(15700, 0));
/// let day = classify_day(date, DayType::Ordinary, Some(&record), &rates);
///
/// assert_eq!(day.outcome, DayOutcome::Worked);
/// assert_eq!(day.regular_hours, Decimal::new(8, 0));
/// assert_eq!(day.overtime_hours, Decimal::ZERO);
/// ```
pub fn classify_day(
    date: NaiveDate,
    day_type: DayType,
    record: Option<&AttendanceRecord>,
    rates: &PayRates,
) -> DailyAttendance {
    let Some((clock_in, clock_out)) = record.and_then(AttendanceRecord::clock_pair) else {
        let outcome = if day_type.is_ordinary() {
            DayOutcome::Absent
        } else {
            DayOutcome::NotScheduled
        };
        return DailyAttendance::empty(date, day_type, outcome);
    };

    let interval = WorkInterval::normalize(date, clock_in, clock_out);
    let schedule = DaySchedule::for_date(date);

    let mut day = DailyAttendance::empty(date, day_type, DayOutcome::Worked);
    day.clock_in = Some(interval.start);
    day.clock_out = Some(interval.end);
    day.raw_hours = interval.raw_hours;
    day.break_hours = interval.break_hours;
    day.paid_hours = interval.paid_hours;

    if day_type.is_ordinary() {
        day.tardiness_minutes = schedule.tardiness_minutes(interval.start);
        day.undertime_minutes = schedule.undertime_minutes(interval.end);
    }

    let boundary = day_type
        .is_ordinary()
        .then_some(schedule.overtime_boundary);
    let (before, after) = split_at_boundary(partition(interval.start, interval.end), boundary);
    let (before, after) = deduct_break(before, after, &interval);

    let excess_tier = if day_type.is_ordinary() {
        CreditTier::Uncredited
    } else {
        CreditTier::Overtime
    };
    let mut credited = Decimal::ZERO;

    for EffectiveSlice { slice, hours } in before {
        if hours.is_zero() {
            continue;
        }

        let take = hours.min((REGULAR_HOURS_CAP - credited).max(Decimal::ZERO));
        let excess = hours - take;
        credited += take;

        if excess.is_zero() {
            day.record(credit(day_type, rates, slice.start, slice.end, hours, CreditTier::Regular, slice.night));
        } else if take.is_zero() {
            day.record(credit(day_type, rates, slice.start, slice.end, excess, excess_tier, slice.night));
        } else {
            let split = split_instant(&slice, take, hours);
            day.record(credit(day_type, rates, slice.start, split, take, CreditTier::Regular, slice.night));
            day.record(credit(day_type, rates, split, slice.end, excess, excess_tier, slice.night));
        }
    }

    for EffectiveSlice { slice, hours } in after {
        if hours.is_zero() {
            continue;
        }
        day.record(credit(day_type, rates, slice.start, slice.end, hours, CreditTier::Overtime, slice.night));
    }

    day
}

fn credit(
    day_type: DayType,
    rates: &PayRates,
    start: NaiveDateTime,
    end: NaiveDateTime,
    hours: Decimal,
    tier: CreditTier,
    night: bool,
) -> SliceCredit {
    let (multiplier, premium) = match tier {
        CreditTier::Regular => (
            slice_multiplier(day_type, false, night),
            night_premium(day_type, false, night),
        ),
        CreditTier::Overtime => (
            slice_multiplier(day_type, true, night),
            night_premium(day_type, true, night),
        ),
        CreditTier::Uncredited => (Decimal::ZERO, Decimal::ZERO),
    };

    SliceCredit {
        start,
        end,
        hours,
        tier,
        night_differential: night,
        multiplier,
        amount: rates.hourly_rate * multiplier * hours,
        night_differential_pay: rates.hourly_rate * premium * hours,
    }
}

/// The clock instant that is `take` out of `hours` effective hours into `slice`.
fn split_instant(slice: &TimeSlice, take: Decimal, hours: Decimal) -> NaiveDateTime {
    let span_ms = (slice.end - slice.start).num_milliseconds();
    let offset_ms = (Decimal::from(span_ms) * take / hours)
        .round()
        .to_i64()
        .unwrap_or(span_ms);
    slice.start + Duration::milliseconds(offset_ms)
}

fn split_at_boundary(
    slices: Vec<TimeSlice>,
    boundary: Option<NaiveDateTime>,
) -> (Vec<TimeSlice>, Vec<TimeSlice>) {
    let Some(boundary) = boundary else {
        return (slices, Vec::new());
    };

    let mut before = Vec::with_capacity(slices.len());
    let mut after = Vec::new();

    for slice in slices {
        if slice.end <= boundary {
            before.push(slice);
        } else if slice.start >= boundary {
            after.push(slice);
        } else if let Some((head, tail)) = slice.split_at(boundary) {
            before.push(head);
            after.push(tail);
        }
    }

    (before, after)
}

/// Applies the unpaid break so that the effective hours sum to the paid hours.
fn deduct_break(
    before: Vec<TimeSlice>,
    after: Vec<TimeSlice>,
    interval: &WorkInterval,
) -> (Vec<EffectiveSlice>, Vec<EffectiveSlice>) {
    let paid = interval.paid_hours;

    let before_target = if after.is_empty() {
        paid
    } else if before.is_empty() {
        Decimal::ZERO
    } else {
        let before_raw: Decimal = before.iter().map(TimeSlice::hours).sum();
        (before_raw - interval.break_hours)
            .max(Decimal::ZERO)
            .min(paid)
    };
    let after_target = (paid - before_target).max(Decimal::ZERO);

    (
        scale_to(before, before_target),
        scale_to(after, after_target),
    )
}

/// Scales slice durations pro rata so that they sum exactly to `target`.
fn scale_to(slices: Vec<TimeSlice>, target: Decimal) -> Vec<EffectiveSlice> {
    let raw: Decimal = slices.iter().map(TimeSlice::hours).sum();
    if raw.is_zero() || target.is_zero() {
        return slices
            .into_iter()
            .map(|slice| EffectiveSlice {
                slice,
                hours: Decimal::ZERO,
            })
            .collect();
    }

    let last = slices.len() - 1;
    let mut remaining = target;

    slices
        .into_iter()
        .enumerate()
        .map(|(index, slice)| {
            let hours = if index == last {
                remaining
            } else {
                (slice.hours() * target / raw).round_dp(EFFECTIVE_HOURS_DP)
            };
            remaining -= hours;
            EffectiveSlice { slice, hours }
        })
        .collect()
}
