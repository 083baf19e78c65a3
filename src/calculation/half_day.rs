//! Half-day leave walk.
//!
//! Each unit is one calendar day charged at half a day. The calendar is not
//! consulted during the walk.

use chrono::NaiveDate;

use crate::calendar::WorkCalendar;
use crate::models::{DayType, LeaveDay};

use super::LeaveWalk;

/// Walks exactly `units` calendar days from `start`, inclusive.
///
/// Returns `None` if fewer than `units` dates remain in the calendar.
pub(crate) fn walk_half_day(
    start: NaiveDate,
    units: u32,
    calendar: &WorkCalendar<'_>,
) -> Option<LeaveWalk> {
    let charge = DayType::HalfDay.charge_per_unit();
    let days: Vec<LeaveDay> = calendar
        .days_from(start)
        .take(units as usize)
        .map(|date| LeaveDay::charged(date, charge))
        .collect();

    if days.len() < units as usize {
        return None;
    }

    let end_date = days.last()?.date;
    Some(LeaveWalk { end_date, days })
}
