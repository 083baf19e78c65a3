//! Return-to-work date resolution.

use chrono::NaiveDate;

use crate::calendar::WorkCalendar;

/// Resolves the first working day after `end_date`.
///
/// Starts from the day after `end_date` and advances while the candidate is
/// a non-working day. Applies to every day type.
pub(crate) fn resolve_return_date(
    end_date: NaiveDate,
    calendar: &WorkCalendar<'_>,
) -> Option<NaiveDate> {
    calendar.next_working_day_after(end_date)
}
