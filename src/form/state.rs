//! Leave request form state.
//!
//! Holds the raw field values a user types, parses them into a
//! [`LeaveComputationInput`], and reports which fields need attention.

use chrono::NaiveDate;
use tracing::debug;

use crate::calendar::parse_calendar_date;
use crate::error::{EngineError, EngineResult};
use crate::models::{DayType, LeaveComputationInput, LeaveComputationResult, LeaveRequestPayload};

/// Field state for a leave request form.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::compute_leave;
/// use leave_engine::form::LeaveRequestForm;
/// use leave_engine::models::HolidaySet;
///
/// let mut form = LeaveRequestForm::new();
/// form.set_start_date("2024-05-03");
/// form.set_units("3");
/// form.set_day_type("Full Day");
///
/// let input = form.input().unwrap();
/// let result = compute_leave(&input, &HolidaySet::new());
/// assert!(form.can_submit(&result));
/// ```
#[derive(Debug, Clone)]
pub struct LeaveRequestForm {
    start_date_raw: String,
    start_date: Option<NaiveDate>,
    units_raw: String,
    units: i64,
    day_type_raw: String,
    day_type: Option<DayType>,
    reason: Option<String>,
}

impl Default for LeaveRequestForm {
    fn default() -> Self {
        Self {
            start_date_raw: String::new(),
            start_date: None,
            units_raw: String::new(),
            units: 0,
            day_type_raw: DayType::FullDay.to_string(),
            day_type: Some(DayType::FullDay),
            reason: None,
        }
    }
}

impl LeaveRequestForm {
    /// Creates an empty form with the full-day policy selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the start date field.
    pub fn set_start_date(&mut self, value: &str) {
        self.start_date_raw = value.to_string();
        self.start_date = parse_calendar_date(value);
        debug!(value, parsed = ?self.start_date, "Start date changed");
    }

    /// Updates the unit count field.
    pub fn set_units(&mut self, value: &str) {
        self.units_raw = value.to_string();
        self.units = value.trim().parse().unwrap_or(0);
        debug!(value, parsed = self.units, "Units changed");
    }

    /// Updates the day type field.
    pub fn set_day_type(&mut self, value: &str) {
        self.day_type_raw = value.to_string();
        self.day_type = value.parse().ok();
        debug!(value, parsed = ?self.day_type, "Day type changed");
    }

    /// Updates the free-text reason.
    pub fn set_reason(&mut self, value: &str) {
        self.reason = Some(value.to_string());
    }

    /// The calculator input for the current fields.
    ///
    /// Returns `None` only when the day type is not recognised; an invalid
    /// date or unit count still produces an input (which computes to the
    /// empty result).
    pub fn input(&self) -> Option<LeaveComputationInput> {
        Some(LeaveComputationInput {
            start_date: self.start_date,
            units: self.units,
            day_type: self.day_type?,
        })
    }

    /// Every field currently failing validation.
    pub fn validation_errors(&self) -> Vec<EngineError> {
        let mut errors = Vec::new();

        if self.start_date.is_none() {
            let message = if self.start_date_raw.trim().is_empty() {
                "start date is required".to_string()
            } else {
                format!("'{}' is not a valid date", self.start_date_raw.trim())
            };
            errors.push(EngineError::InvalidLeaveRequest {
                field: "start_date".to_string(),
                message,
            });
        }

        if self.units <= 0 {
            errors.push(EngineError::InvalidLeaveRequest {
                field: "units".to_string(),
                message: "must be a positive whole number".to_string(),
            });
        }

        if self.day_type.is_none() {
            errors.push(EngineError::InvalidDayType {
                value: self.day_type_raw.clone(),
            });
        }

        errors
    }

    /// Whether the form may be submitted with `result`.
    ///
    /// Submission stays disabled while any field is invalid or the result
    /// is empty.
    pub fn can_submit(&self, result: &LeaveComputationResult) -> bool {
        self.validation_errors().is_empty() && !result.is_empty()
    }

    /// Builds the submission payload for `result`.
    pub fn to_payload(
        &self,
        employee_id: &str,
        leave_type: &str,
        result: &LeaveComputationResult,
    ) -> EngineResult<LeaveRequestPayload> {
        if let Some(error) = self.validation_errors().into_iter().next() {
            return Err(error);
        }

        let input = self.input().ok_or_else(|| EngineError::InvalidDayType {
            value: self.day_type_raw.clone(),
        })?;

        LeaveRequestPayload::from_computation(
            employee_id,
            leave_type,
            &input,
            result,
            self.reason.clone(),
        )
    }
}
