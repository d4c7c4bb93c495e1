//! Employee model.
//!
//! The engine reads two attributes of an employee: the monthly salary the
//! pay rates derive from, and the designated weekly rest day.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Largest accepted monthly salary (one trillion currency units).
pub const MAX_MONTHLY_SALARY: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Represents an employee whose pay is computed from attendance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name carried through to the pay summary.
    pub name: String,
    /// Monthly salary in currency units, from zero up to [`MAX_MONTHLY_SALARY`].
    pub monthly_salary: Decimal,
    /// The designated weekly rest day, serialized as a full weekday name.
    #[serde(with = "weekday_name")]
    pub rest_day: Weekday,
}

impl Employee {
    /// Checks the invariants the engine relies on.
    ///
    /// The salary must lie in `0..=MAX_MONTHLY_SALARY`; above that bound the
    /// period totals could overflow `Decimal`.
    pub fn validate(&self) -> EngineResult<()> {
        if self.monthly_salary < Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                field: "monthly_salary".to_string(),
                message: format!("must not be negative, got {}", self.monthly_salary),
            });
        }
        if self.monthly_salary > MAX_MONTHLY_SALARY {
            return Err(EngineError::InvalidEmployee {
                field: "monthly_salary".to_string(),
                message: format!(
                    "must not exceed {}, got {}",
                    MAX_MONTHLY_SALARY, self.monthly_salary
                ),
            });
        }
        Ok(())
    }
}

/// Parses a weekday name such as `"Sunday"` or `"sun"` (case-insensitive).
pub fn parse_weekday(name: &str) -> EngineResult<Weekday> {
    name.trim()
        .parse::<Weekday>()
        .map_err(|_| EngineError::InvalidEmployee {
            field: "rest_day".to_string(),
            message: format!("'{}' is not a weekday name", name),
        })
}

/// Returns the full English name of a weekday.
pub fn weekday_full_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

mod weekday_name {
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(weekday: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(super::weekday_full_name(*weekday))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let name = String::deserialize(deserializer)?;
        super::parse_weekday(&name).map_err(serde::de::Error::custom)
    }
}
