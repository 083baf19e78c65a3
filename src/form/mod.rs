//! Leave request form controller.
//!
//! [`LeaveRequestForm`] owns the field state and builds the submission
//! payload; [`DebouncedCalculator`] recomputes the leave period after input
//! settles.

mod debounce;
mod state;

pub use debounce::DebouncedCalculator;
pub use state::LeaveRequestForm;
