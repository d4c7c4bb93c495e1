//! Configuration types for the holiday calendar.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::Holiday;

/// Metadata about the configured calendar.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarMetadata {
    /// Short code of the calendar (e.g., "PH-NCR").
    pub code: String,
    /// The human-readable name of the calendar.
    pub name: String,
    /// The region the calendar applies to.
    #[serde(default)]
    pub region: Option<String>,
}

/// One holiday file under `holidays/`.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayFile {
    /// The holidays listed in the file.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}
