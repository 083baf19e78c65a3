//! Debounced recomputation for the leave request form.
//!
//! Each input change cancels the pending computation and schedules a new
//! one after a fixed delay, so a burst of keystrokes computes once. The
//! calculator stays synchronous; only the scheduling is async.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::calculation::calculate_leave;
use crate::models::{HolidaySet, LeaveCalculation, LeaveComputationInput};

/// Schedules leave computations behind a cancellable timer.
///
/// Results are published on a [`watch`] channel. Must be used from within
/// a tokio runtime.
///
/// # Example
///
/// ```
/// use leave_engine::form::DebouncedCalculator;
/// use leave_engine::models::{DayType, HolidaySet, LeaveComputationInput};
/// use chrono::NaiveDate;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut calculator = DebouncedCalculator::new(HolidaySet::new(), Duration::from_millis(10));
/// let mut results = calculator.subscribe();
///
/// let start = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
/// calculator.schedule(LeaveComputationInput::new(start, 1, DayType::FullDay));
///
/// results.changed().await.unwrap();
/// assert_eq!(results.borrow().result.end_date, Some(start));
/// # }
/// ```
#[derive(Debug)]
pub struct DebouncedCalculator {
    holidays: Arc<HolidaySet>,
    delay: Duration,
    sender: Arc<watch::Sender<LeaveCalculation>>,
    pending: Option<JoinHandle<()>>,
}

impl DebouncedCalculator {
    /// Creates a calculator over `holidays` that waits `delay` after the last change.
    pub fn new(holidays: HolidaySet, delay: Duration) -> Self {
        let (sender, _) = watch::channel(LeaveCalculation::empty());
        Self {
            holidays: Arc::new(holidays),
            delay,
            sender: Arc::new(sender),
            pending: None,
        }
    }

    /// Subscribes to published calculations.
    pub fn subscribe(&self) -> watch::Receiver<LeaveCalculation> {
        self.sender.subscribe()
    }

    /// The most recently published calculation.
    pub fn latest(&self) -> LeaveCalculation {
        self.sender.borrow().clone()
    }

    /// Whether a computation is waiting for its delay to elapse.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Schedules a computation for `input`, cancelling any pending one.
    pub fn schedule(&mut self, input: LeaveComputationInput) {
        self.cancel();

        let holidays = Arc::clone(&self.holidays);
        let sender = Arc::clone(&self.sender);
        let delay = self.delay;

        debug!(?input, delay_ms = delay.as_millis(), "Scheduling leave computation");
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let calculation = calculate_leave(&input, &holidays);
            sender.send_replace(calculation);
        }));
    }

    /// Cancels the pending computation, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for DebouncedCalculator {
    fn drop(&mut self) {
        self.cancel();
    }
}
