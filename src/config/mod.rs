//! Configuration loading for the payroll engine.
//!
//! Organizational constants are compiled in. What is configured is the
//! holiday calendar, loaded from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ph").unwrap();
//! println!("Loaded calendar: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalendarMetadata, HolidayFile};
