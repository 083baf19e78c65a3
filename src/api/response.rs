//! Error bodies returned by the leave endpoints.
//!
//! Successful responses serialize domain types directly; only failures go
//! through [`ApiError`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// JSON body of a failed leave request or computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Stable machine-readable code, e.g. `LEAVE_TYPE_NOT_FOUND`.
    pub code: String,
    /// Message suitable for showing next to the form.
    pub message: String,
    /// Hint about which input to fix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// An error without a hint.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// An error carrying a hint.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// `VALIDATION_ERROR`: a required field is missing or a value is unusable.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// `MALFORMED_JSON`: the body could not be decoded.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// An [`ApiError`] paired with the status it is sent with.
pub struct ApiErrorResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// JSON body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::LeaveTypeNotFound { code } => Self::bad_request(ApiError::with_details(
                "LEAVE_TYPE_NOT_FOUND",
                message,
                format!("The leave type '{}' is not offered", code),
            )),
            EngineError::DayTypeNotAllowed { .. } => {
                Self::bad_request(ApiError::new("DAY_TYPE_NOT_ALLOWED", message))
            }
            EngineError::InvalidDayType { .. } => {
                Self::bad_request(ApiError::validation_error(message))
            }
            EngineError::InvalidLeaveRequest { field, .. } => {
                Self::bad_request(ApiError::with_details(
                    "INVALID_LEAVE_REQUEST",
                    message,
                    format!("Check the '{}' field", field),
                ))
            }
        }
    }
}
