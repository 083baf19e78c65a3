//! Public holiday and holiday set models.
//!
//! This module contains the [`PublicHoliday`] record loaded from configuration
//! and the [`HolidaySet`] consumed by the work calendar.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Region name for holidays observed everywhere.
pub const NATIONAL_REGION: &str = "national";

/// Represents a configured public holiday.
///
/// # Example
///
/// ```
/// use leave_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     name: "New Year's Day".to_string(),
///     region: "national".to_string(),
/// };
/// assert!(holiday.applies_to(Some("north")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday.
    pub name: String,
    /// The region where this holiday applies (e.g., "national").
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_region() -> String {
    NATIONAL_REGION.to_string()
}

impl PublicHoliday {
    /// Checks whether the holiday is observed in `region`.
    ///
    /// National holidays apply everywhere. With no region given only
    /// national holidays apply.
    pub fn applies_to(&self, region: Option<&str>) -> bool {
        self.region.eq_ignore_ascii_case(NATIONAL_REGION)
            || region.is_some_and(|r| self.region.eq_ignore_ascii_case(r))
    }
}

/// An immutable set of non-working holiday dates.
///
/// The set is supplied by the caller; the calendar only reads it.
///
/// # Example
///
/// ```
/// use leave_engine::models::HolidaySet;
/// use chrono::NaiveDate;
///
/// let new_year = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let holidays: HolidaySet = [new_year].into_iter().collect();
///
/// assert!(holidays.contains(new_year));
/// assert_eq!(holidays.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    /// Creates an empty holiday set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from configured holidays observed in `region`.
    pub fn from_holidays<'a, I>(holidays: I, region: Option<&str>) -> Self
    where
        I: IntoIterator<Item = &'a PublicHoliday>,
    {
        holidays
            .into_iter()
            .filter(|h| h.applies_to(region))
            .map(|h| h.date)
            .collect()
    }

    /// Checks whether `date` is a holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Number of holiday dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the set has no dates.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterates the dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}
