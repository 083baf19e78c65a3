//! Leave Engine for HR leave requests
//!
//! This crate computes leave periods against a work calendar: the end date,
//! the return-to-work date and the chargeable days of a request under the
//! full-day, half-day and on/off policies. It also provides the form
//! controller, notification store and HTTP API that sit around that core.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod calendar;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod notifications;
