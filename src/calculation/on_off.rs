//! On/off (rotational) leave walk.
//!
//! Before each unit is counted, any run of non-working days at the cursor is
//! skipped. The counted day becomes the running end date and the cursor
//! moves to the following day.

use chrono::NaiveDate;

use crate::calendar::WorkCalendar;
use crate::models::{DayType, LeaveDay};

use super::LeaveWalk;

/// Counts `units` rotational days starting at `start`.
///
/// Returns `None` if the calendar runs out of dates.
pub(crate) fn walk_on_off(
    start: NaiveDate,
    units: u32,
    calendar: &WorkCalendar<'_>,
) -> Option<LeaveWalk> {
    let charge = DayType::OnOff.charge_per_unit();
    let mut candidates = calendar.days_from(start);
    let mut days = Vec::new();
    let mut end_date = None;

    for _ in 0..units {
        // Leading off-days for this unit.
        let date = loop {
            let date = candidates.next()?;
            match calendar.classify(date).skip_disposition() {
                Some(disposition) => days.push(LeaveDay::skipped(date, disposition)),
                None => break date,
            }
        };

        days.push(LeaveDay::charged(date, charge));
        end_date = Some(date);
    }

    Some(LeaveWalk {
        end_date: end_date?,
        days,
    })
}
