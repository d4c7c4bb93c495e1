//! Pay-rate multipliers per day type.
//!
//! | Day type | Non-OT | OT |
//! |---|---|---|
//! | Ordinary | 1.00 | 1.25 |
//! | Rest day | 1.30 | 1.69 |
//! | Special holiday | 1.30 | 1.69 |
//! | Special holiday on rest day | 1.50 | 1.69 |
//! | Regular holiday | 2.00 | 2.60 |
//!
//! Time inside the night window is paid a further 110%.

use rust_decimal::Decimal;

use super::DayType;

/// Premium applied on top of the base multiplier for night work.
pub const NIGHT_DIFFERENTIAL_PREMIUM: Decimal = Decimal::from_parts(110, 0, 0, false, 2);

const ORDINARY: Decimal = Decimal::from_parts(100, 0, 0, false, 2);
const ORDINARY_OVERTIME: Decimal = Decimal::from_parts(125, 0, 0, false, 2);
const REST_DAY: Decimal = Decimal::from_parts(130, 0, 0, false, 2);
const REST_DAY_OVERTIME: Decimal = Decimal::from_parts(169, 0, 0, false, 2);
const SPECIAL_ON_REST_DAY: Decimal = Decimal::from_parts(150, 0, 0, false, 2);
const REGULAR_HOLIDAY: Decimal = Decimal::from_parts(200, 0, 0, false, 2);
const REGULAR_HOLIDAY_OVERTIME: Decimal = Decimal::from_parts(260, 0, 0, false, 2);

/// Returns the base multiplier for a day type and overtime tier.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{DayType, base_multiplier};
/// use rust_decimal::Decimal;
///
/// assert_eq!(base_multiplier(DayType::RestDay, false), Decimal::new(130, 2));
/// assert_eq!(base_multiplier(DayType::RegularHoliday, true), Decimal::new(260, 2));
/// ```
pub fn base_multiplier(day_type: DayType, overtime: bool) -> Decimal {
    match (day_type, overtime) {
        (DayType::Ordinary, false) => ORDINARY,
        (DayType::Ordinary, true) => ORDINARY_OVERTIME,
        (DayType::RestDay | DayType::SpecialHoliday, false) => REST_DAY,
        (DayType::SpecialHolidayOnRestDay, false) => SPECIAL_ON_REST_DAY,
        (
            DayType::RestDay | DayType::SpecialHoliday | DayType::SpecialHolidayOnRestDay,
            true,
        ) => REST_DAY_OVERTIME,
        (DayType::RegularHoliday, false) => REGULAR_HOLIDAY,
        (DayType::RegularHoliday, true) => REGULAR_HOLIDAY_OVERTIME,
    }
}

/// Returns the final multiplier of a slice, including the night premium.
pub fn slice_multiplier(day_type: DayType, overtime: bool, night: bool) -> Decimal {
    let base = base_multiplier(day_type, overtime);
    if night {
        base * NIGHT_DIFFERENTIAL_PREMIUM
    } else {
        base
    }
}

/// The share of [`slice_multiplier`] owed to the night premium.
///
/// Zero outside the night window; otherwise `base * (1.10 - 1)`.
pub fn night_premium(day_type: DayType, overtime: bool, night: bool) -> Decimal {
    if night {
        base_multiplier(day_type, overtime) * (NIGHT_DIFFERENTIAL_PREMIUM - Decimal::ONE)
    } else {
        Decimal::ZERO
    }
}

/// Returns true if `multiplier` is one of the overtime-tier base values.
pub fn is_overtime_tier(multiplier: Decimal) -> bool {
    [ORDINARY_OVERTIME, REST_DAY_OVERTIME, REGULAR_HOLIDAY_OVERTIME].contains(&multiplier)
}
