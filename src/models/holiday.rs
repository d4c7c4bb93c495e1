//! Holiday calendar models.
//!
//! This module contains the [`Holiday`] entry type and the [`HolidayCalendar`]
//! lookup the day-type resolver consults.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The two statutory holiday tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    /// Special (non-working) holiday.
    Special,
    /// Regular holiday, paid at the higher premium.
    Regular,
}

/// A single dated holiday.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Holiday, HolidayKind};
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2026, 12, 25).unwrap(),
///     name: "Christmas Day".to_string(),
///     kind: HolidayKind::Regular,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Rizal Day").
    #[serde(default)]
    pub name: String,
    /// The holiday tier.
    pub kind: HolidayKind,
}

/// A set of dates, each mapped to exactly one holiday.
///
/// Serializes as a plain list of [`Holiday`] entries ordered by date.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Holiday, HolidayCalendar, HolidayKind};
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::from_holidays(vec![Holiday {
///     date: NaiveDate::from_ymd_opt(2026, 8, 21).unwrap(),
///     name: "Ninoy Aquino Day".to_string(),
///     kind: HolidayKind::Special,
/// }])
/// .unwrap();
///
/// assert_eq!(
///     calendar.kind_on(NaiveDate::from_ymd_opt(2026, 8, 21).unwrap()),
///     Some(HolidayKind::Special)
/// );
/// assert_eq!(calendar.kind_on(NaiveDate::from_ymd_opt(2026, 8, 22).unwrap()), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Holiday>", try_from = "Vec<Holiday>")]
pub struct HolidayCalendar {
    holidays: BTreeMap<NaiveDate, Holiday>,
}

impl HolidayCalendar {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a calendar from a list of holidays.
    ///
    /// Repeated dates are accepted when they agree on the kind; a date listed
    /// as both special and regular is rejected.
    pub fn from_holidays<I>(holidays: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = Holiday>,
    {
        let mut calendar = Self::new();
        for holiday in holidays {
            calendar.add(holiday)?;
        }
        Ok(calendar)
    }

    /// Adds a holiday, rejecting a conflicting kind on an existing date.
    pub fn add(&mut self, holiday: Holiday) -> EngineResult<()> {
        if let Some(existing) = self.holidays.get(&holiday.date) {
            if existing.kind != holiday.kind {
                return Err(EngineError::ConflictingHoliday { date: holiday.date });
            }
            return Ok(());
        }
        self.holidays.insert(holiday.date, holiday);
        Ok(())
    }

    /// Inserts a holiday, replacing whatever the calendar held for that date.
    pub fn set(&mut self, holiday: Holiday) {
        self.holidays.insert(holiday.date, holiday);
    }

    /// Returns the holiday kind on `date`, if the date is a holiday.
    pub fn kind_on(&self, date: NaiveDate) -> Option<HolidayKind> {
        self.holidays.get(&date).map(|h| h.kind)
    }

    /// Returns the holiday entry on `date`, if any.
    pub fn get(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.get(&date)
    }

    /// Iterates over holidays in date order.
    pub fn iter(&self) -> impl Iterator<Item = &Holiday> {
        self.holidays.values()
    }

    /// Returns the number of holidays.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if the calendar has no holidays.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

impl From<HolidayCalendar> for Vec<Holiday> {
    fn from(calendar: HolidayCalendar) -> Self {
        calendar.holidays.into_values().collect()
    }
}

impl TryFrom<Vec<Holiday>> for HolidayCalendar {
    type Error = EngineError;

    fn try_from(holidays: Vec<Holiday>) -> Result<Self, Self::Error> {
        Self::from_holidays(holidays)
    }
}
