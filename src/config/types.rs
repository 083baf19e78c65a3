//! Configuration types for the leave calendar.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::HashMap;

use serde::Deserialize;

use crate::models::{DayType, HolidaySet, PublicHoliday};

/// Default debounce delay for form recomputation, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

/// Metadata about the calendar.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarMetadata {
    /// Short identifier for the calendar (e.g., "default").
    pub code: String,
    /// The human-readable name of the calendar.
    pub name: String,
    /// Region used when a request does not name one.
    #[serde(default)]
    pub default_region: Option<String>,
    /// Delay before the form controller recomputes after an input change.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

/// A leave type offered to employees.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveType {
    /// The human-readable name of the leave type.
    pub name: String,
    /// Day types that may be requested for this leave type.
    pub day_types: Vec<DayType>,
    /// Largest number of units a single request may ask for.
    #[serde(default)]
    pub max_units: Option<u32>,
}

impl LeaveType {
    /// Whether `day_type` may be requested for this leave type.
    pub fn allows(&self, day_type: DayType) -> bool {
        self.day_types.contains(&day_type)
    }
}

/// Leave types configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveTypesConfig {
    /// Map of leave type code to leave type details.
    pub leave_types: HashMap<String, LeaveType>,
}

/// One year of holidays.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayCalendar {
    /// The year every holiday in the file falls in.
    pub year: i32,
    /// Holidays for the year.
    pub holidays: Vec<PublicHoliday>,
}

/// The complete leave configuration.
#[derive(Debug, Clone)]
pub struct LeaveConfig {
    calendar: CalendarMetadata,
    leave_types: HashMap<String, LeaveType>,
    holidays: Vec<PublicHoliday>,
}

impl LeaveConfig {
    /// Creates a new configuration; holidays are kept in date order.
    pub fn new(
        calendar: CalendarMetadata,
        leave_types: HashMap<String, LeaveType>,
        mut holidays: Vec<PublicHoliday>,
    ) -> Self {
        holidays.sort_by_key(|h| h.date);
        Self {
            calendar,
            leave_types,
            holidays,
        }
    }

    /// Returns the calendar metadata.
    pub fn calendar(&self) -> &CalendarMetadata {
        &self.calendar
    }

    /// Returns the leave types.
    pub fn leave_types(&self) -> &HashMap<String, LeaveType> {
        &self.leave_types
    }

    /// Returns all configured holidays, in date order.
    pub fn holidays(&self) -> &[PublicHoliday] {
        &self.holidays
    }

    /// Builds the holiday set observed in `region`.
    ///
    /// Falls back to the calendar's default region when `region` is `None`.
    pub fn holiday_set(&self, region: Option<&str>) -> HolidaySet {
        let region = region.or(self.calendar.default_region.as_deref());
        HolidaySet::from_holidays(&self.holidays, region)
    }
}
