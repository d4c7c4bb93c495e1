//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every caller contract violation the engine can detect. Valid-shape
//! input never fails: missing attendance, zero salary and overnight shifts
//! are all handled as ordinary data.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
/// use chrono::NaiveDate;
///
/// let error = EngineError::InvalidPeriod {
///     start: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     end: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid pay period: end date 2026-01-01 is before start date 2026-01-15"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The period end date precedes the period start date.
    #[error("Invalid pay period: end date {end} is before start date {start}")]
    InvalidPeriod {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// The period spans more days than a single request may compute.
    #[error("Invalid pay period: {start} to {end} exceeds {max_days} days")]
    PeriodTooLong {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
        /// The longest accepted period.
        max_days: i64,
    },

    /// An attendance record violated the caller contract.
    #[error("Invalid attendance record for {date}: {message}")]
    InvalidAttendanceRecord {
        /// The date of the offending record.
        date: NaiveDate,
        /// A description of what made the record invalid.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The same date was mapped to both a special and a regular holiday.
    #[error("Conflicting holiday kinds on {date}")]
    ConflictingHoliday {
        /// The date with conflicting entries.
        date: NaiveDate,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
