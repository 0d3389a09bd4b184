//! Scoped timed steps with guaranteed completion reporting.
//!
//! A step starts a spinner and a timer, runs the wrapped operation, and
//! reports completion with elapsed time on every exit path. Errors are
//! reported and then propagated; they are never swallowed.

use crate::report::format_elapsed;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// A spinner-backed step around one phase of a profiling pass
pub struct Step {
    spinner: ProgressBar,
    success_text: String,
}

impl Step {
    pub fn new(text: impl Into<String>, success_text: impl Into<String>) -> Self {
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.set_message(text.into());
        spinner.enable_steady_tick(TICK_INTERVAL);

        Self {
            spinner,
            success_text: success_text.into(),
        }
    }

    /// Run the wrapped operation, reporting the outcome either way
    pub fn run<T, F>(self, operation: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let start = Instant::now();
        match operation() {
            Ok(value) => {
                self.spinner.finish_with_message(format!(
                    "✔ {} in {}",
                    self.success_text,
                    format_elapsed(start.elapsed())
                ));
                Ok(value)
            }
            Err(error) => {
                self.spinner.abandon_with_message(format!(
                    "✖ {:#} after {}",
                    error,
                    format_elapsed(start.elapsed())
                ));
                Err(error)
            }
        }
    }
}
