//! Shared state for the payroll API.

use std::path::Path;
use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::HolidayCalendar;

/// State cloned into every handler.
///
/// The holiday calendar is loaded once at startup and read-only afterwards;
/// request holidays are laid over a copy per request.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Wraps an already loaded configuration.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Loads the calendar directory at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        ConfigLoader::load(path).map(Self::new)
    }

    /// Returns the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// The configured holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        self.config.calendar()
    }

    /// Code of the configured calendar, e.g. `PH-NCR`.
    pub fn calendar_code(&self) -> &str {
        &self.config.metadata().code
    }
}
