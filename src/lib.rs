//! Period payroll engine for hourly-tracked employees.
//!
//! This crate turns clock-in/clock-out records into a pay summary for one
//! employee over an inclusive date range. Each worked day is cut into
//! 15-minute slices, every slice is credited at the multiplier of its day
//! type, overtime status and night window, and the period totals are then
//! reduced by statutory contributions, attendance penalties and income tax.
//!
//! The engine in [`calculation`] is pure: the same inputs always produce
//! the same summary. [`config`] loads holiday calendars from YAML and
//! [`api`] exposes the engine over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
