//! Error types for the Leave Engine.
//!
//! The leave calculator itself never fails; invalid input degrades to an
//! empty result. These errors cover configuration loading and the validation
//! performed around a leave request before it is submitted.

use thiserror::Error;

use crate::models::DayType;

/// The main error type for the Leave Engine.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/calendar.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/calendar.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Leave type code was not found in the configuration.
    #[error("Leave type not found: {code}")]
    LeaveTypeNotFound {
        /// The leave type code that was not found.
        code: String,
    },

    /// The leave type does not permit the requested day type.
    #[error("Day type '{day_type}' is not allowed for leave type '{leave_type}'")]
    DayTypeNotAllowed {
        /// The leave type code.
        leave_type: String,
        /// The rejected day type.
        day_type: DayType,
    },

    /// A day type label could not be recognised.
    #[error("Unknown day type: {value}")]
    InvalidDayType {
        /// The label as supplied.
        value: String,
    },

    /// A leave request failed validation.
    #[error("Invalid leave request field '{field}': {message}")]
    InvalidLeaveRequest {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
