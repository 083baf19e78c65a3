//! Core data models for the Leave Engine.
//!
//! This module contains the value types shared by the calendar, the
//! calculator, the form controller and the HTTP API.

mod day_type;
mod holiday;
mod leave;
mod leave_request;

pub use day_type::DayType;
pub use holiday::{HolidaySet, NATIONAL_REGION, PublicHoliday};
pub use leave::{
    DayDisposition, LeaveCalculation, LeaveComputationInput, LeaveComputationResult, LeaveDay,
};
pub use leave_request::{LeaveRequestPayload, LeaveStatus};
