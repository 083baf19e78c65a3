//! Leave duration calculation.
//!
//! This module turns a [`LeaveComputationInput`] into a
//! [`LeaveComputationResult`] according to its day type. The calculation is
//! pure and synchronous: identical inputs always give identical outputs and
//! nothing depends on the current date.

use rust_decimal::Decimal;

use crate::calendar::WorkCalendar;
use crate::models::{
    DayType, HolidaySet, LeaveCalculation, LeaveComputationInput, LeaveComputationResult,
};

use super::full_day::walk_full_day;
use super::half_day::walk_half_day;
use super::on_off::walk_on_off;
use super::return_date::resolve_return_date;

/// Largest unit count accepted, roughly ten years of leave.
///
/// Larger requests compute to the empty result, the same as `units <= 0`,
/// even though the count itself is positive.
pub const MAX_LEAVE_UNITS: i64 = 3660;

/// Computes the end date, return date and chargeable days for a leave request.
///
/// Invalid input (missing start date or `units <= 0`) yields
/// [`LeaveComputationResult::empty`]; this function never fails.
///
/// Positive unit counts above [`MAX_LEAVE_UNITS`] are also treated as
/// invalid and give the empty result, so a walk can never run for an
/// unbounded number of days. Leave types may impose a lower `max_units`,
/// which is checked on submission rather than here.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::compute_leave;
/// use leave_engine::models::{DayType, HolidaySet, LeaveComputationInput};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // 2024-05-03 is a Friday
/// let start = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
/// let input = LeaveComputationInput::new(start, 3, DayType::FullDay);
///
/// let result = compute_leave(&input, &HolidaySet::new());
/// assert_eq!(result.end_date, NaiveDate::from_ymd_opt(2024, 5, 7));
/// assert_eq!(result.return_date, NaiveDate::from_ymd_opt(2024, 5, 8));
/// assert_eq!(result.chargeable_days, Decimal::from(3));
/// ```
pub fn compute_leave(input: &LeaveComputationInput, holidays: &HolidaySet) -> LeaveComputationResult {
    calculate_leave(input, holidays).result
}

/// Computes a leave request together with its per-day breakdown.
///
/// The breakdown lists every day visited from the start date to the end
/// date with how it was treated. The result is identical to
/// [`compute_leave`].
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::calculate_leave;
/// use leave_engine::models::{DayDisposition, DayType, HolidaySet, LeaveComputationInput};
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
/// let input = LeaveComputationInput::new(start, 2, DayType::FullDay);
///
/// let calculation = calculate_leave(&input, &HolidaySet::new());
/// assert_eq!(calculation.days.len(), 4); // Fri, Sat, Sun, Mon
/// assert_eq!(calculation.days[1].disposition, DayDisposition::Weekend);
/// ```
pub fn calculate_leave(input: &LeaveComputationInput, holidays: &HolidaySet) -> LeaveCalculation {
    let Some(start) = input.start_date else {
        return LeaveCalculation::empty();
    };
    let Some(units) = valid_units(input.units) else {
        return LeaveCalculation::empty();
    };

    let calendar = WorkCalendar::new(holidays);
    let walk = match input.day_type {
        DayType::FullDay => walk_full_day(start, units, &calendar),
        DayType::HalfDay => walk_half_day(start, units, &calendar),
        DayType::OnOff => walk_on_off(start, units, &calendar),
    };

    let Some(walk) = walk else {
        return LeaveCalculation::empty();
    };
    let Some(return_date) = resolve_return_date(walk.end_date, &calendar) else {
        return LeaveCalculation::empty();
    };

    LeaveCalculation {
        result: LeaveComputationResult {
            end_date: Some(walk.end_date),
            return_date: Some(return_date),
            chargeable_days: Decimal::from(units) * input.day_type.charge_per_unit(),
        },
        days: walk.days,
    }
}

fn valid_units(units: i64) -> Option<u32> {
    if units <= 0 || units > MAX_LEAVE_UNITS {
        return None;
    }
    u32::try_from(units).ok()
}
