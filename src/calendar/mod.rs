//! Work calendar for the Leave Engine.
//!
//! This module classifies dates as working or non-working (weekend or
//! holiday), parses calendar dates from form and wire values, and provides
//! the [`WorkCalendar`] used to walk leave periods.

mod date;
mod day_class;
mod work_calendar;

pub use date::parse_calendar_date;
pub use day_class::{DayClass, classify_day, is_holiday, is_non_working_day, is_weekend};
pub use work_calendar::WorkCalendar;
