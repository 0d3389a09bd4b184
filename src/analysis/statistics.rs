//! Summary statistics over filtered trace events.
//!
//! Derives min/max/mean/median durations plus the originating event for
//! each extremal value. All values are recomputed fresh per run; nothing
//! is cached.

use crate::trace::TraceEvent;
use crate::utils::error::StatisticsError;
use log::debug;
use std::time::Duration;

/// Summary statistics for a non-empty set of trace events
///
/// `min_event`/`max_event`/`median_event` name the first event in the
/// filtered sequence's original order whose duration equals the value
/// exactly (lookup by value, not identity). The mean has no single
/// originating event.
#[derive(Debug, Clone)]
pub struct DurationStatistics {
    pub min: Duration,
    pub max: Duration,
    pub mean: Duration,
    pub median: Duration,
    pub min_event: String,
    pub max_event: String,
    pub median_event: String,
}

impl DurationStatistics {
    /// Observed duration range (`max - min`); zero when all durations match
    pub fn range(&self) -> Duration {
        self.max - self.min
    }
}

/// Compute duration statistics over a filtered event sequence
///
/// The median is the element at index `count / 2` of the ascending-sorted
/// durations. For even counts that is the upper-middle element, not the
/// average of the two central elements; interpolating would produce a
/// duration with no originating event to report.
///
/// # Errors
/// `StatisticsError::EmptyInput` when `events` is empty.
pub fn compute_statistics(events: &[TraceEvent]) -> Result<DurationStatistics, StatisticsError> {
    let durations = sorted_durations(events);
    let count = durations.len();
    if count == 0 {
        return Err(StatisticsError::EmptyInput);
    }

    let min = durations[0];
    let max = durations[count - 1];
    let median = durations[count / 2];

    let total_seconds: f64 = durations.iter().map(Duration::as_secs_f64).sum();
    let mean = Duration::from_secs_f64(total_seconds / count as f64);

    debug!(
        "Statistics over {} events: min {:?}, max {:?}, median {:?}",
        count, min, max, median
    );

    Ok(DurationStatistics {
        min,
        max,
        mean,
        median,
        min_event: event_with_duration(events, min),
        max_event: event_with_duration(events, max),
        median_event: event_with_duration(events, median),
    })
}

/// Extract all durations, sorted ascending
pub fn sorted_durations(events: &[TraceEvent]) -> Vec<Duration> {
    let mut durations: Vec<Duration> = events.iter().map(|e| e.duration).collect();
    durations.sort_unstable();
    durations
}

/// Name of the first event (in sequence order) with exactly this duration
///
/// min/max/median are always drawn from the event set, so a match exists.
fn event_with_duration(events: &[TraceEvent], duration: Duration) -> String {
    events
        .iter()
        .find(|event| event.duration == duration)
        .map(|event| event.name.clone())
        .unwrap_or_default()
}
