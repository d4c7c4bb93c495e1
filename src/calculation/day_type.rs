//! Day-type resolution.
//!
//! Each calendar day is classified once into a [`DayType`] which the rest of
//! the classifier consumes. The holiday kind comes from the record's explicit
//! tag when present, else from the holiday calendar. A day is a rest day when
//! its weekday is the employee's rest day or the record is tagged as one.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::{DayTypeTag, HolidayCalendar, HolidayKind};

/// The pay classification of one calendar day.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::DayType;
///
/// assert_eq!(DayType::SpecialHolidayOnRestDay.to_string(), "special_holiday_on_rest_day");
/// assert!(DayType::Ordinary.is_ordinary());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// A scheduled working day.
    Ordinary,
    /// The employee's rest day, not a holiday.
    RestDay,
    /// A special holiday that is not the employee's rest day.
    SpecialHoliday,
    /// A special holiday falling on the employee's rest day.
    SpecialHolidayOnRestDay,
    /// A regular holiday, whether or not it is the rest day.
    RegularHoliday,
}

impl DayType {
    /// Returns true for a scheduled working day.
    pub fn is_ordinary(&self) -> bool {
        matches!(self, DayType::Ordinary)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Ordinary => write!(f, "ordinary"),
            DayType::RestDay => write!(f, "rest_day"),
            DayType::SpecialHoliday => write!(f, "special_holiday"),
            DayType::SpecialHolidayOnRestDay => write!(f, "special_holiday_on_rest_day"),
            DayType::RegularHoliday => write!(f, "regular_holiday"),
        }
    }
}

/// Resolves the day type of `date`.
///
/// A regular holiday on a rest day stays [`DayType::RegularHoliday`]; only
/// special holidays have an on-rest-day variant.
///
/// # Arguments
///
/// * `date` - The calendar date being classified
/// * `rest_day` - The employee's designated weekly rest day
/// * `calendar` - The holiday calendar
/// * `tag` - The attendance record's explicit day-type tag, if any
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{DayType, resolve_day_type};
/// use payroll_engine::models::HolidayCalendar;
/// use chrono::{NaiveDate, Weekday};
///
/// let calendar = HolidayCalendar::new();
/// // 2026-01-11 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2026, 1, 11).unwrap();
/// assert_eq!(resolve_day_type(sunday, Weekday::Sun, &calendar, None), DayType::RestDay);
/// assert_eq!(resolve_day_type(sunday, Weekday::Sat, &calendar, None), DayType::Ordinary);
/// ```
pub fn resolve_day_type(
    date: NaiveDate,
    rest_day: Weekday,
    calendar: &HolidayCalendar,
    tag: Option<DayTypeTag>,
) -> DayType {
    let holiday = match tag {
        Some(DayTypeTag::SpecialHoliday) => Some(HolidayKind::Special),
        Some(DayTypeTag::RegularHoliday) => Some(HolidayKind::Regular),
        Some(DayTypeTag::RestDay) | None => calendar.kind_on(date),
    };
    let is_rest = date.weekday() == rest_day || tag == Some(DayTypeTag::RestDay);

    match (holiday, is_rest) {
        (Some(HolidayKind::Regular), _) => DayType::RegularHoliday,
        (Some(HolidayKind::Special), true) => DayType::SpecialHolidayOnRestDay,
        (Some(HolidayKind::Special), false) => DayType::SpecialHoliday,
        (None, true) => DayType::RestDay,
        (None, false) => DayType::Ordinary,
    }
}
