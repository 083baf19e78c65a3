//! Day classification for the work calendar.
//!
//! This module determines whether a date is a working day, a weekend day or
//! a holiday. The weekend is fixed to Saturday and Sunday.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::{DayDisposition, HolidaySet};

/// The working status of a calendar date.
///
/// # Example
///
/// ```
/// use leave_engine::calendar::DayClass;
///
/// assert!(DayClass::Working.is_working());
/// assert!(!DayClass::Weekend.is_working());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayClass {
    /// Monday through Friday and not a holiday.
    Working,
    /// Saturday or Sunday.
    Weekend,
    /// A configured holiday, including one that falls on a weekend.
    Holiday,
}

impl DayClass {
    /// Whether leave can be charged against this day.
    pub fn is_working(self) -> bool {
        self == DayClass::Working
    }

    /// The breakdown disposition for a day skipped because of this class.
    ///
    /// Returns `None` for working days.
    pub fn skip_disposition(self) -> Option<DayDisposition> {
        match self {
            DayClass::Working => None,
            DayClass::Weekend => Some(DayDisposition::Weekend),
            DayClass::Holiday => Some(DayDisposition::Holiday),
        }
    }
}

impl std::fmt::Display for DayClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayClass::Working => write!(f, "Working"),
            DayClass::Weekend => write!(f, "Weekend"),
            DayClass::Holiday => write!(f, "Holiday"),
        }
    }
}

/// Returns true iff `date` falls on a Saturday or Sunday.
///
/// ```
/// use leave_engine::calendar::is_weekend;
/// use chrono::NaiveDate;
///
/// // 2024-05-04 is a Saturday
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2024, 5, 4).unwrap()));
/// // 2024-05-03 is a Friday
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2024, 5, 3).unwrap()));
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns true iff `date` is in `holidays`.
pub fn is_holiday(date: NaiveDate, holidays: &HolidaySet) -> bool {
    holidays.contains(date)
}

/// Returns true iff `date` is a weekend day or a holiday.
///
/// ```
/// use leave_engine::calendar::is_non_working_day;
/// use leave_engine::models::HolidaySet;
/// use chrono::NaiveDate;
///
/// let new_year = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let holidays: HolidaySet = [new_year].into_iter().collect();
///
/// assert!(is_non_working_day(new_year, &holidays));
/// assert!(!is_non_working_day(new_year, &HolidaySet::new()));
/// ```
pub fn is_non_working_day(date: NaiveDate, holidays: &HolidaySet) -> bool {
    is_weekend(date) || is_holiday(date, holidays)
}

/// Classifies `date` against the fixed weekend and `holidays`.
///
/// A holiday takes precedence over the weekend.
pub fn classify_day(date: NaiveDate, holidays: &HolidaySet) -> DayClass {
    if is_holiday(date, holidays) {
        DayClass::Holiday
    } else if is_weekend(date) {
        DayClass::Weekend
    } else {
        DayClass::Working
    }
}
