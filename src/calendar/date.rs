//! Calendar date parsing.
//!
//! Dates are carried as [`NaiveDate`], which has no time-of-day component.
//! Timestamps with an offset are converted to UTC before the date is taken,
//! so the same instant always maps to the same calendar date.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parses a form or wire value into a calendar date.
///
/// Accepts `YYYY-MM-DD`, a naive `YYYY-MM-DDTHH:MM:SS` timestamp, or an RFC
/// 3339 timestamp. Returns `None` for anything else.
///
/// # Example
///
/// ```
/// use leave_engine::calendar::parse_calendar_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 5, 3);
/// assert_eq!(parse_calendar_date("2024-05-03"), expected);
/// assert_eq!(parse_calendar_date("2024-05-03T15:30:00"), expected);
/// assert_eq!(parse_calendar_date("2024-05-04T01:00:00+03:00"), expected);
/// assert_eq!(parse_calendar_date("not a date"), None);
/// ```
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.with_timezone(&Utc).date_naive());
    }

    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|datetime| datetime.date())
}
