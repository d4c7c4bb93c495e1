//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the holiday
//! calendar from YAML files.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayCalendar, HolidayKind};

use super::types::{CalendarMetadata, HolidayFile};

/// Loads and provides access to the holiday calendar.
///
/// # Directory Structure
///
/// ```text
/// config/ph/
/// ├── calendar.yaml   # Calendar metadata
/// └── holidays/
///     └── 2026.yaml   # Holidays for one year
/// ```
///
/// Every `*.yaml` file under `holidays/` is merged into one calendar.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/ph").unwrap();
///
/// let christmas = NaiveDate::from_ymd_opt(2026, 12, 25).unwrap();
/// println!("{:?}", loader.holiday_kind(christmas));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    metadata: CalendarMetadata,
    calendar: HolidayCalendar,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `calendar.yaml` or the `holidays/` directory is missing
    /// - Any file contains invalid YAML
    /// - Two files give the same date different holiday kinds
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/ph")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<CalendarMetadata>(&path.join("calendar.yaml"))?;
        let calendar = Self::load_holidays(&path.join("holidays"))?;

        debug!(
            code = %metadata.code,
            holidays = calendar.len(),
            "Loaded holiday calendar"
        );

        Ok(Self { metadata, calendar })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads and merges every holiday file in the holidays directory.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<HolidayCalendar> {
        let holidays_dir_str = holidays_dir.display().to_string();

        if !holidays_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: holidays_dir_str,
            });
        }

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut calendar = HolidayCalendar::new();
        for path in paths {
            let file = Self::load_yaml::<HolidayFile>(&path)?;
            for holiday in file.holidays {
                calendar.add(holiday)?;
            }
        }

        Ok(calendar)
    }

    /// Returns the calendar metadata.
    pub fn metadata(&self) -> &CalendarMetadata {
        &self.metadata
    }

    /// Returns the merged holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Returns the holiday kind configured for `date`, if any.
    pub fn holiday_kind(&self, date: NaiveDate) -> Option<HolidayKind> {
        self.calendar.kind_on(date)
    }
}
