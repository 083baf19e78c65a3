//! Leave request submission payload.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::{DayType, LeaveComputationInput, LeaveComputationResult};

/// Approval status of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting approval.
    Pending,
    /// Approved by a manager.
    Approved,
    /// Rejected by a manager.
    Rejected,
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaveStatus::Pending => write!(f, "pending"),
            LeaveStatus::Approved => write!(f, "approved"),
            LeaveStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// The payload sent to the leave-request API once a computation succeeds.
///
/// # Example
///
/// ```
/// use leave_engine::models::{DayType, LeaveRequestPayload, LeaveStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let payload = LeaveRequestPayload {
///     id: Uuid::new_v4(),
///     employee_id: "emp_001".to_string(),
///     leave_type: "annual".to_string(),
///     day_type: DayType::FullDay,
///     start_date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 5, 7).unwrap(),
///     return_date: NaiveDate::from_ymd_opt(2024, 5, 8).unwrap(),
///     number_of_days: Decimal::from(3),
///     reason: None,
///     status: LeaveStatus::Pending,
/// };
/// assert_eq!(payload.status, LeaveStatus::Pending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequestPayload {
    /// Identifier assigned to this request.
    pub id: Uuid,
    /// The requesting employee.
    pub employee_id: String,
    /// Leave type code (e.g., "annual").
    pub leave_type: String,
    /// The day type policy used.
    pub day_type: DayType,
    /// First day of leave.
    pub start_date: NaiveDate,
    /// Last day of leave.
    pub end_date: NaiveDate,
    /// First working day back.
    pub return_date: NaiveDate,
    /// Chargeable days deducted from the balance.
    pub number_of_days: Decimal,
    /// Free-text reason supplied by the employee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Approval status.
    pub status: LeaveStatus,
}

impl LeaveRequestPayload {
    /// Builds a pending request from a computed leave period.
    ///
    /// Fails when the input has no start date or the result is empty, which
    /// is the state in which submission is disabled.
    pub fn from_computation(
        employee_id: impl Into<String>,
        leave_type: impl Into<String>,
        input: &LeaveComputationInput,
        result: &LeaveComputationResult,
        reason: Option<String>,
    ) -> EngineResult<Self> {
        let start_date = input.start_date.ok_or_else(|| EngineError::InvalidLeaveRequest {
            field: "start_date".to_string(),
            message: "a valid start date is required".to_string(),
        })?;

        let (Some(end_date), Some(return_date)) = (result.end_date, result.return_date) else {
            return Err(EngineError::InvalidLeaveRequest {
                field: "units".to_string(),
                message: "leave duration could not be computed".to_string(),
            });
        };

        Ok(Self {
            id: Uuid::new_v4(),
            employee_id: employee_id.into(),
            leave_type: leave_type.into(),
            day_type: input.day_type,
            start_date,
            end_date,
            return_date,
            number_of_days: result.chargeable_days,
            reason: reason.filter(|r| !r.trim().is_empty()),
            status: LeaveStatus::Pending,
        })
    }

    /// Identifies the same request across repeated submissions.
    ///
    /// Built from the request's content; the generated `id` is not part of it.
    /// For a fixed start date and day type the end date determines the units.
    pub fn request_key(&self) -> String {
        format!(
            "{}:{}:{}:{}:{}",
            self.employee_id, self.leave_type, self.day_type, self.start_date, self.end_date
        )
    }

    /// Marks a pending request as approved.
    pub fn approve(&mut self) -> EngineResult<()> {
        self.decide(LeaveStatus::Approved)
    }

    /// Marks a pending request as rejected.
    pub fn reject(&mut self) -> EngineResult<()> {
        self.decide(LeaveStatus::Rejected)
    }

    fn decide(&mut self, status: LeaveStatus) -> EngineResult<()> {
        if self.status != LeaveStatus::Pending {
            return Err(EngineError::InvalidLeaveRequest {
                field: "status".to_string(),
                message: format!("request is already {}", self.status),
            });
        }
        self.status = status;
        Ok(())
    }
}
