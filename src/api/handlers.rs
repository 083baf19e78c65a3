//! HTTP request handlers for the Leave Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::calculate_leave;
use crate::error::EngineError;
use crate::models::LeaveRequestPayload;
use crate::notifications::Notification;

use super::request::{ComputeRequest, LeaveRequestSubmission};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/leave/compute", post(compute_handler))
        .route("/leave/requests", post(submit_handler))
        .route("/notifications", get(notifications_handler))
        .with_state(state)
}

/// Handler for POST /leave/compute.
///
/// Always answers 200 for well-formed JSON; invalid dates or unit counts
/// produce the empty calculation.
async fn compute_handler(
    State(state): State<AppState>,
    payload: Result<Json<ComputeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave computation");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    let holidays = state.config().holiday_set(request.region.as_deref());
    let calculation = calculate_leave(&request.input(), &holidays);

    info!(
        correlation_id = %correlation_id,
        day_type = %request.day_type,
        units = request.units,
        chargeable_days = %calculation.result.chargeable_days,
        duration_us = start_time.elapsed().as_micros(),
        "Leave computation completed"
    );

    json_response(StatusCode::OK, &calculation)
}

/// Handler for POST /leave/requests.
///
/// Validates the request against its leave type, computes the leave period,
/// and records a notification for the approver.
async fn submit_handler(
    State(state): State<AppState>,
    payload: Result<Json<LeaveRequestSubmission>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave request submission");

    let submission = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match build_leave_request(&state, submission) {
        Ok(leave_request) => {
            let notified = state
                .notifications()
                .lock()
                .await
                .push(Notification::for_request(&leave_request));
            if !notified {
                debug!(
                    correlation_id = %correlation_id,
                    request_key = %leave_request.request_key(),
                    "Repeated submission, notification already recorded"
                );
            }

            info!(
                correlation_id = %correlation_id,
                request_id = %leave_request.id,
                employee_id = %leave_request.employee_id,
                number_of_days = %leave_request.number_of_days,
                notified,
                "Leave request accepted"
            );
            json_response(StatusCode::CREATED, &leave_request)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Leave request rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /notifications.
async fn notifications_handler(State(state): State<AppState>) -> Response {
    let notifications = state.notifications().lock().await.list();
    json_response(StatusCode::OK, &notifications)
}

/// Checks, computes and assembles a pending leave request.
fn build_leave_request(
    state: &AppState,
    submission: LeaveRequestSubmission,
) -> Result<LeaveRequestPayload, EngineError> {
    let config = state.config();
    let input = submission.input();

    config.check_request(&submission.leave_type, &input)?;

    let holidays = config.holiday_set(submission.region.as_deref());
    let calculation = calculate_leave(&input, &holidays);

    LeaveRequestPayload::from_computation(
        submission.employee_id,
        submission.leave_type,
        &input,
        &calculation.result,
        submission.reason,
    )
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response()
}
