//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the leave
//! calendar from YAML files.

use std::fs;
use std::path::Path;
use std::time::Duration;

use chrono::Datelike;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{HolidaySet, LeaveComputationInput, PublicHoliday};

use super::types::{CalendarMetadata, HolidayCalendar, LeaveConfig, LeaveType, LeaveTypesConfig};

/// Loads and provides access to the leave configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── calendar.yaml      # Calendar metadata and form settings
/// ├── leave_types.yaml   # Leave types and their permitted day types
/// └── holidays/
///     └── 2024.yaml      # Holidays for one year
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let holidays = loader.holiday_set(None);
/// println!("{} holidays in {}", holidays.len(), loader.calendar().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: LeaveConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any required file is missing, contains invalid
    /// YAML, or if a holiday file lists a date outside its declared year.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let calendar = Self::load_yaml::<CalendarMetadata>(&path.join("calendar.yaml"))?;
        let leave_types = Self::load_yaml::<LeaveTypesConfig>(&path.join("leave_types.yaml"))?;
        let holidays = Self::load_holidays(&path.join("holidays"))?;

        debug!(
            calendar = %calendar.code,
            leave_types = leave_types.leave_types.len(),
            holidays = holidays.len(),
            "Loaded leave configuration"
        );

        Ok(Self {
            config: LeaveConfig::new(calendar, leave_types.leave_types, holidays),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: LeaveConfig) -> Self {
        Self { config }
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

    /// Loads every yearly holiday file from the holidays directory.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<Vec<PublicHoliday>> {
        let holidays_dir_str = holidays_dir.display().to_string();

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut holidays = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let calendar = Self::load_yaml::<HolidayCalendar>(&path)?;
                if let Some(stray) = calendar.holidays.iter().find(|h| h.date.year() != calendar.year) {
                    return Err(EngineError::ConfigParseError {
                        path: path.display().to_string(),
                        message: format!(
                            "holiday '{}' on {} is outside year {}",
                            stray.name, stray.date, calendar.year
                        ),
                    });
                }
                holidays.extend(calendar.holidays);
            }
        }

        Ok(holidays)
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &LeaveConfig {
        &self.config
    }

    /// Returns the calendar metadata.
    pub fn calendar(&self) -> &CalendarMetadata {
        self.config.calendar()
    }

    /// Returns all configured holidays, in date order.
    pub fn holidays(&self) -> &[PublicHoliday] {
        self.config.holidays()
    }

    /// Builds the holiday set for `region` (or the default region).
    pub fn holiday_set(&self, region: Option<&str>) -> HolidaySet {
        self.config.holiday_set(region)
    }

    /// Gets a leave type by its code.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use leave_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// let annual = loader.get_leave_type("annual")?;
    /// println!("Leave type: {}", annual.name);
    /// # Ok::<(), leave_engine::error::EngineError>(())
    /// ```
    pub fn get_leave_type(&self, code: &str) -> EngineResult<&LeaveType> {
        self.config
            .leave_types()
            .get(code)
            .ok_or_else(|| EngineError::LeaveTypeNotFound {
                code: code.to_string(),
            })
    }

    /// Checks a request against the rules of its leave type.
    ///
    /// The leave type must exist, permit the requested day type, and allow
    /// at least the requested number of units.
    pub fn check_request(
        &self,
        leave_type: &str,
        input: &LeaveComputationInput,
    ) -> EngineResult<&LeaveType> {
        let config = self.get_leave_type(leave_type)?;

        if !config.allows(input.day_type) {
            return Err(EngineError::DayTypeNotAllowed {
                leave_type: leave_type.to_string(),
                day_type: input.day_type,
            });
        }

        if let Some(max_units) = config.max_units {
            if input.units > i64::from(max_units) {
                return Err(EngineError::InvalidLeaveRequest {
                    field: "units".to_string(),
                    message: format!(
                        "{} allows at most {} units per request",
                        config.name, max_units
                    ),
                });
            }
        }

        Ok(config)
    }

    /// The debounce delay for form recomputation.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.config.calendar().debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayType;
    use chrono::NaiveDate;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.calendar().code, "default");
        assert_eq!(loader.calendar().name, "Default Work Calendar");
    }

    #[test]
    fn test_debounce_from_calendar() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.debounce(), Duration::from_millis(300));
    }

    #[test]
    fn test_holidays_loaded_from_every_year() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let holidays = loader.holiday_set(None);

        assert!(holidays.contains(make_date("2024-01-01")));
        assert!(holidays.contains(make_date("2025-12-25")));
    }

    #[test]
    fn test_holidays_are_date_ordered() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let dates: Vec<NaiveDate> = loader.holidays().iter().map(|h| h.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_regional_holiday_only_in_region() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let regional = make_date("2024-08-05");

        assert!(loader.holiday_set(Some("north")).contains(regional));
        assert!(!loader.holiday_set(Some("south")).contains(regional));
    }

    #[test]
    fn test_get_leave_type() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let annual = loader.get_leave_type("annual").unwrap();
        assert_eq!(annual.name, "Annual Leave");
        assert!(annual.allows(DayType::FullDay));
        assert!(annual.allows(DayType::HalfDay));
    }

    #[test]
    fn test_get_leave_type_unknown_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.get_leave_type("sabbatical") {
            Err(EngineError::LeaveTypeNotFound { code }) => assert_eq!(code, "sabbatical"),
            other => panic!("Expected LeaveTypeNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_check_request_accepts_permitted_day_type() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let input = LeaveComputationInput::new(make_date("2024-05-03"), 2, DayType::HalfDay);

        let leave_type = loader.check_request("annual", &input).unwrap();
        assert_eq!(leave_type.name, "Annual Leave");
    }

    #[test]
    fn test_check_request_rejects_day_type() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let input = LeaveComputationInput::new(make_date("2024-05-03"), 2, DayType::OnOff);

        match loader.check_request("annual", &input) {
            Err(EngineError::DayTypeNotAllowed {
                leave_type,
                day_type,
            }) => {
                assert_eq!(leave_type, "annual");
                assert_eq!(day_type, DayType::OnOff);
            }
            other => panic!("Expected DayTypeNotAllowed error, got {:?}", other),
        }
    }

    #[test]
    fn test_check_request_rejects_units_above_maximum() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let input = LeaveComputationInput::new(make_date("2024-05-03"), 31, DayType::FullDay);

        match loader.check_request("annual", &input) {
            Err(EngineError::InvalidLeaveRequest { field, .. }) => assert_eq!(field, "units"),
            other => panic!("Expected InvalidLeaveRequest error, got {:?}", other),
        }
    }

    #[test]
    fn test_check_request_without_maximum() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let input = LeaveComputationInput::new(make_date("2024-05-03"), 200, DayType::FullDay);
        assert!(loader.check_request("sick", &input).is_ok());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("calendar.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
