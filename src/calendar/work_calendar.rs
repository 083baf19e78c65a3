//! The work calendar used to walk leave periods.

use chrono::NaiveDate;

use crate::models::HolidaySet;

use super::{DayClass, classify_day, is_holiday, is_non_working_day, is_weekend};

/// A borrowed view of a holiday set with date-walking helpers.
///
/// # Example
///
/// ```
/// use leave_engine::calendar::WorkCalendar;
/// use leave_engine::models::HolidaySet;
/// use chrono::NaiveDate;
///
/// let holidays = HolidaySet::new();
/// let calendar = WorkCalendar::new(&holidays);
///
/// // 2024-05-03 is a Friday; the next working day is Monday 2024-05-06
/// let friday = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
/// assert_eq!(
///     calendar.next_working_day_after(friday),
///     NaiveDate::from_ymd_opt(2024, 5, 6)
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WorkCalendar<'a> {
    holidays: &'a HolidaySet,
}

impl<'a> WorkCalendar<'a> {
    /// Creates a calendar over `holidays`.
    pub fn new(holidays: &'a HolidaySet) -> Self {
        Self { holidays }
    }

    /// The holiday set this calendar reads.
    pub fn holidays(&self) -> &'a HolidaySet {
        self.holidays
    }

    /// See [`is_weekend`].
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        is_weekend(date)
    }

    /// See [`is_holiday`].
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        is_holiday(date, self.holidays)
    }

    /// See [`is_non_working_day`].
    pub fn is_non_working_day(&self, date: NaiveDate) -> bool {
        is_non_working_day(date, self.holidays)
    }

    /// See [`classify_day`].
    pub fn classify(&self, date: NaiveDate) -> DayClass {
        classify_day(date, self.holidays)
    }

    /// The sequence of candidate dates starting at `start`, inclusive.
    ///
    /// The sequence ends at the last representable date.
    pub fn days_from(&self, start: NaiveDate) -> impl Iterator<Item = NaiveDate> + use<> {
        std::iter::successors(Some(start), |d| d.succ_opt())
    }

    /// The first working day strictly after `date`.
    ///
    /// Returns `None` only if no working day is representable after `date`.
    pub fn next_working_day_after(&self, date: NaiveDate) -> Option<NaiveDate> {
        let first = date.succ_opt()?;
        self.days_from(first).find(|d| !self.is_non_working_day(*d))
    }

    /// Number of working days from `start` to `end`, both inclusive.
    ///
    /// Returns 0 when `end` is before `start`.
    pub fn working_days_between(&self, start: NaiveDate, end: NaiveDate) -> usize {
        self.days_from(start)
            .take_while(|d| *d <= end)
            .filter(|d| !self.is_non_working_day(*d))
            .count()
    }
}
