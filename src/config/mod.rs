//! Configuration loading and management for the Leave Engine.
//!
//! This module loads the work calendar from YAML files: calendar metadata,
//! the leave type catalogue and yearly holiday lists.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded calendar: {}", config.calendar().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CalendarMetadata, DEFAULT_DEBOUNCE_MS, HolidayCalendar, LeaveConfig, LeaveType,
    LeaveTypesConfig,
};
