//! Statutory deductions and progressive income tax.
//!
//! Contributions are computed from the monthly salary, not the period's
//! earnings. Lateness, undertime and absences are charged at the hourly and
//! daily rates. Income tax applies to gross pay less the three contributions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rates::PayRates;

/// Social insurance contribution rate (5%).
pub const SOCIAL_INSURANCE_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Health insurance contribution rate (2.5%).
pub const HEALTH_INSURANCE_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 3);

/// Fixed housing fund contribution per period.
pub const HOUSING_CONTRIBUTION: Decimal = Decimal::from_parts(200, 0, 0, false, 0);

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// One row of the income tax table.
#[derive(Debug, Clone, Copy)]
struct TaxBracket {
    /// Inclusive upper bound of the bracket; `None` for the top bracket.
    ceiling: Option<Decimal>,
    /// Fixed tax owed at the bracket floor.
    base_tax: Decimal,
    /// Marginal rate on income above `floor`.
    rate: Decimal,
    floor: Decimal,
}

const TAX_BRACKETS: [TaxBracket; 6] = [
    TaxBracket {
        ceiling: Some(Decimal::from_parts(20_833, 0, 0, false, 0)),
        base_tax: Decimal::ZERO,
        rate: Decimal::ZERO,
        floor: Decimal::ZERO,
    },
    TaxBracket {
        ceiling: Some(Decimal::from_parts(33_333, 0, 0, false, 0)),
        base_tax: Decimal::ZERO,
        rate: Decimal::ZERO,
        floor: Decimal::ZERO,
    },
    TaxBracket {
        ceiling: Some(Decimal::from_parts(66_667, 0, 0, false, 0)),
        base_tax: Decimal::ZERO,
        rate: Decimal::from_parts(15, 0, 0, false, 2),
        floor: Decimal::from_parts(20_833, 0, 0, false, 0),
    },
    TaxBracket {
        ceiling: Some(Decimal::from_parts(166_667, 0, 0, false, 0)),
        base_tax: Decimal::from_parts(1_875, 0, 0, false, 0),
        rate: Decimal::from_parts(20, 0, 0, false, 2),
        floor: Decimal::from_parts(33_333, 0, 0, false, 0),
    },
    TaxBracket {
        ceiling: Some(Decimal::from_parts(666_667, 0, 0, false, 0)),
        base_tax: Decimal::from_parts(335_418, 0, 0, false, 1),
        rate: Decimal::from_parts(30, 0, 0, false, 2),
        floor: Decimal::from_parts(166_667, 0, 0, false, 0),
    },
    TaxBracket {
        ceiling: None,
        base_tax: Decimal::from_parts(1_835_418, 0, 0, false, 1),
        rate: Decimal::from_parts(35, 0, 0, false, 2),
        floor: Decimal::from_parts(666_667, 0, 0, false, 0),
    },
];

/// Computes income tax on a monthly taxable income.
///
/// Incomes up to 33,333 are untaxed. Negative income owes nothing.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::income_tax;
/// use rust_decimal::Decimal;
///
/// assert_eq!(income_tax(Decimal::new(20_833, 0)), Decimal::ZERO);
/// assert_eq!(income_tax(Decimal::new(40_000, 0)), Decimal::new(2_875_05, 2));
/// ```
pub fn income_tax(taxable_income: Decimal) -> Decimal {
    if taxable_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let bracket = TAX_BRACKETS
        .iter()
        .find(|b| b.ceiling.is_none_or(|ceiling| taxable_income <= ceiling))
        .unwrap_or(&TAX_BRACKETS[TAX_BRACKETS.len() - 1]);

    bracket.base_tax + bracket.rate * (taxable_income - bracket.floor)
}

/// The itemized deductions of one period at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// Social insurance contribution.
    pub social_insurance: Decimal,
    /// Health insurance contribution.
    pub health_insurance: Decimal,
    /// Housing fund contribution.
    pub housing_contribution: Decimal,
    /// Lateness charged at the hourly rate.
    pub lateness_deduction: Decimal,
    /// Undertime charged at the hourly rate.
    pub undertime_deduction: Decimal,
    /// Absences charged at the daily rate.
    pub absence_deduction: Decimal,
    /// Gross pay less the three contributions.
    pub taxable_income: Decimal,
    /// Income tax on the taxable income.
    pub income_tax: Decimal,
}

impl Deductions {
    /// Sum of the three statutory contributions.
    pub fn contributions(&self) -> Decimal {
        self.social_insurance + self.health_insurance + self.housing_contribution
    }

    /// Sum of every deduction including income tax.
    pub fn total(&self) -> Decimal {
        self.contributions()
            + self.lateness_deduction
            + self.undertime_deduction
            + self.absence_deduction
            + self.income_tax
    }
}

/// Computes every deduction for a period.
///
/// # Arguments
///
/// * `gross_pay` - The period's gross pay
/// * `rates` - The employee's resolved rates (carries the monthly salary)
/// * `tardiness_minutes` - Total minutes late in the period
/// * `undertime_minutes` - Total minutes left early in the period
/// * `absences` - Number of absent ordinary days
pub fn compute_deductions(
    gross_pay: Decimal,
    rates: &PayRates,
    tardiness_minutes: Decimal,
    undertime_minutes: Decimal,
    absences: u32,
) -> Deductions {
    let social_insurance = rates.monthly_salary * SOCIAL_INSURANCE_RATE;
    let health_insurance = rates.monthly_salary * HEALTH_INSURANCE_RATE;
    let housing_contribution = HOUSING_CONTRIBUTION;
    let taxable_income = gross_pay - (social_insurance + health_insurance + housing_contribution);

    Deductions {
        social_insurance,
        health_insurance,
        housing_contribution,
        lateness_deduction: tardiness_minutes / MINUTES_PER_HOUR * rates.hourly_rate,
        undertime_deduction: undertime_minutes / MINUTES_PER_HOUR * rates.hourly_rate,
        absence_deduction: Decimal::from(absences) * rates.daily_rate,
        taxable_income,
        income_tax: income_tax(taxable_income),
    }
}
