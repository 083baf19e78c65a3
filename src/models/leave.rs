//! Leave computation input and result models.
//!
//! This module contains the value types passed into and returned from the
//! leave calculator. None of them outlive a single computation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::parse_calendar_date;

use super::DayType;

/// The input to a leave computation.
///
/// `start_date` is optional so that a missing or unparseable form field can
/// still be represented; such inputs compute to the empty result.
///
/// # Example
///
/// ```
/// use leave_engine::models::{DayType, LeaveComputationInput};
/// use chrono::NaiveDate;
///
/// let input = LeaveComputationInput::from_form("2024-05-03", "3", DayType::FullDay);
/// assert_eq!(input.start_date, NaiveDate::from_ymd_opt(2024, 5, 3));
/// assert_eq!(input.units, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveComputationInput {
    /// The first day of the leave period.
    pub start_date: Option<NaiveDate>,
    /// The number of units requested.
    pub units: i64,
    /// The day type policy.
    pub day_type: DayType,
}

impl LeaveComputationInput {
    /// Creates an input from an already-parsed start date.
    pub fn new(start_date: NaiveDate, units: i64, day_type: DayType) -> Self {
        Self {
            start_date: Some(start_date),
            units,
            day_type,
        }
    }

    /// Builds an input from raw form values.
    ///
    /// An unparseable date becomes `None` and an unparseable unit count
    /// becomes `0`; both compute to the empty result.
    pub fn from_form(start_date: &str, units: &str, day_type: DayType) -> Self {
        Self {
            start_date: parse_calendar_date(start_date),
            units: units.trim().parse().unwrap_or(0),
            day_type,
        }
    }
}

/// The outcome of a leave computation.
///
/// # Example
///
/// ```
/// use leave_engine::models::LeaveComputationResult;
/// use rust_decimal::Decimal;
///
/// let empty = LeaveComputationResult::empty();
/// assert!(empty.is_empty());
/// assert_eq!(empty.chargeable_days, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveComputationResult {
    /// The last day of leave, unset for the empty result.
    pub end_date: Option<NaiveDate>,
    /// The first working day after the leave, unset for the empty result.
    pub return_date: Option<NaiveDate>,
    /// The amount deducted from the leave balance.
    pub chargeable_days: Decimal,
}

impl LeaveComputationResult {
    /// The "not yet computed" result used for invalid input.
    pub fn empty() -> Self {
        Self {
            end_date: None,
            return_date: None,
            chargeable_days: Decimal::ZERO,
        }
    }

    /// Whether this is the empty result.
    pub fn is_empty(&self) -> bool {
        self.end_date.is_none()
    }
}

impl Default for LeaveComputationResult {
    fn default() -> Self {
        Self::empty()
    }
}

/// How a day visited by the leave walk was treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayDisposition {
    /// The day consumed a unit and was charged.
    Charged,
    /// Skipped because it falls on a weekend.
    Weekend,
    /// Skipped because it is a holiday.
    Holiday,
}

/// One day visited while walking a leave period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveDay {
    /// The calendar date.
    pub date: NaiveDate,
    /// How the day was treated.
    pub disposition: DayDisposition,
    /// The amount charged for this day (zero when skipped).
    pub charge: Decimal,
}

impl LeaveDay {
    /// A charged day.
    pub fn charged(date: NaiveDate, charge: Decimal) -> Self {
        Self {
            date,
            disposition: DayDisposition::Charged,
            charge,
        }
    }

    /// A skipped day.
    pub fn skipped(date: NaiveDate, disposition: DayDisposition) -> Self {
        Self {
            date,
            disposition,
            charge: Decimal::ZERO,
        }
    }
}

/// A leave computation together with its per-day breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveCalculation {
    /// The computed result.
    pub result: LeaveComputationResult,
    /// Every day visited from the start date to the end date, in order.
    pub days: Vec<LeaveDay>,
}

impl LeaveCalculation {
    /// The empty calculation.
    pub fn empty() -> Self {
        Self {
            result: LeaveComputationResult::empty(),
            days: Vec::new(),
        }
    }

    /// Number of days that consumed a unit.
    pub fn charged_day_count(&self) -> usize {
        self.days
            .iter()
            .filter(|d| d.disposition == DayDisposition::Charged)
            .count()
    }
}
