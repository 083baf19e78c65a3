//! Full-day leave walk.
//!
//! Each unit is one working day. Weekends and holidays inside the span are
//! walked over without being charged, so a request spanning a weekend
//! extends past it.

use chrono::NaiveDate;

use crate::calendar::WorkCalendar;
use crate::models::{DayType, LeaveDay};

use super::LeaveWalk;

/// Walks forward from `start`, counting only working days, until `units`
/// have been counted.
///
/// The end date is the last counted day. `start` itself is charged only if
/// it is a working day. Returns `None` if the calendar runs out of dates.
pub(crate) fn walk_full_day(
    start: NaiveDate,
    units: u32,
    calendar: &WorkCalendar<'_>,
) -> Option<LeaveWalk> {
    if units == 0 {
        return None;
    }

    let charge = DayType::FullDay.charge_per_unit();
    let mut days = Vec::new();
    let mut counted = 0;

    for date in calendar.days_from(start) {
        match calendar.classify(date).skip_disposition() {
            Some(disposition) => days.push(LeaveDay::skipped(date, disposition)),
            None => {
                days.push(LeaveDay::charged(date, charge));
                counted += 1;
                if counted == units {
                    return Some(LeaveWalk {
                        end_date: date,
                        days,
                    });
                }
            }
        }
    }

    None
}
