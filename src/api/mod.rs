//! HTTP API module for the Leave Engine.
//!
//! This module provides the REST endpoints for computing leave periods,
//! submitting leave requests and reading notifications.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ComputeRequest, LeaveRequestSubmission};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
