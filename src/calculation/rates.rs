//! Pay rate resolution.
//!
//! Every rate derives from the monthly salary through a fixed formula:
//!
//! - `basic_pay = salary / 2`
//! - `daily_rate = salary / 313 * 12`
//! - `hourly_rate = daily_rate / 8`

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Working days per year the daily rate is based on.
pub const WORKING_DAYS_PER_YEAR: Decimal = Decimal::from_parts(313, 0, 0, false, 0);

/// Months per year.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Paid hours in a standard working day.
pub const HOURS_PER_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// The number of pay periods a monthly salary is split into for basic pay.
pub const BASIC_PAY_DIVISOR: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// The rates resolved once per computation from the monthly salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRates {
    /// The monthly salary the rates were resolved from.
    pub monthly_salary: Decimal,
    /// Half of the monthly salary.
    pub basic_pay: Decimal,
    /// Pay for one working day.
    pub daily_rate: Decimal,
    /// Pay for one working hour.
    pub hourly_rate: Decimal,
}

/// Resolves the basic, daily and hourly rates for a monthly salary.
///
/// A zero salary yields zero rates.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::resolve_rates;
/// use rust_decimal::Decimal;
///
/// let rates = resolve_rates(Decimal::new(15700, 0));
/// assert_eq!(rates.basic_pay, Decimal::new(7850, 0));
/// assert_eq!(rates.daily_rate.round_dp(2), Decimal::new(60192, 2));
/// assert_eq!(rates.hourly_rate.round_dp(2), Decimal::new(7524, 2));
/// ```
pub fn resolve_rates(monthly_salary: Decimal) -> PayRates {
    let daily_rate = monthly_salary / WORKING_DAYS_PER_YEAR * MONTHS_PER_YEAR;

    PayRates {
        monthly_salary,
        basic_pay: monthly_salary / BASIC_PAY_DIVISOR,
        daily_rate,
        hourly_rate: daily_rate / HOURS_PER_DAY,
    }
}
