//! Calculation logic for the Leave Engine.
//!
//! This module contains the leave duration calculator: one walk per day type
//! (full day, half day, on/off), return-date resolution shared by all of
//! them, and the [`compute_leave`] entry point that dispatches between them.

mod full_day;
mod half_day;
mod leave_duration;
mod on_off;
mod return_date;

use chrono::NaiveDate;

use crate::models::LeaveDay;

pub use leave_duration::{MAX_LEAVE_UNITS, calculate_leave, compute_leave};

/// The outcome of walking the calendar for one day type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LeaveWalk {
    /// The last day that consumed a unit.
    pub end_date: NaiveDate,
    /// Every day visited, in order.
    pub days: Vec<LeaveDay>,
}
