//! Request types for the Leave Engine API.
//!
//! This module defines the JSON request structures for the leave endpoints.

use serde::{Deserialize, Serialize};

use crate::calendar::parse_calendar_date;
use crate::models::{DayType, LeaveComputationInput};

/// Request body for the `/leave/compute` endpoint.
///
/// The start date is carried as text so that an unparseable value computes
/// to the empty result instead of being rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeRequest {
    /// The first day of leave, `YYYY-MM-DD`.
    #[serde(default)]
    pub start_date: Option<String>,
    /// The number of units requested.
    pub units: i64,
    /// The day type policy.
    pub day_type: DayType,
    /// Holiday region; the calendar default applies when absent.
    #[serde(default)]
    pub region: Option<String>,
}

impl ComputeRequest {
    /// The calculator input for this request.
    pub fn input(&self) -> LeaveComputationInput {
        LeaveComputationInput {
            start_date: self.start_date.as_deref().and_then(parse_calendar_date),
            units: self.units,
            day_type: self.day_type,
        }
    }
}

/// Request body for the `/leave/requests` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequestSubmission {
    /// The requesting employee.
    pub employee_id: String,
    /// Leave type code (e.g., "annual").
    pub leave_type: String,
    /// The first day of leave, `YYYY-MM-DD`.
    pub start_date: String,
    /// The number of units requested.
    pub units: i64,
    /// The day type policy.
    pub day_type: DayType,
    /// Holiday region; the calendar default applies when absent.
    #[serde(default)]
    pub region: Option<String>,
    /// Free-text reason.
    #[serde(default)]
    pub reason: Option<String>,
}

impl LeaveRequestSubmission {
    /// The calculator input for this submission.
    pub fn input(&self) -> LeaveComputationInput {
        LeaveComputationInput {
            start_date: parse_calendar_date(&self.start_date),
            units: self.units,
            day_type: self.day_type,
        }
    }
}
