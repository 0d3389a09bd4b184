//! Report presentation: fixed-width duration formatting and info lines.
//!
//! Purely a formatting layer. Takes the computed statistics and histogram
//! and produces the plain-text report; no derived computation happens here.

use crate::analysis::{DurationStatistics, Histogram};
use std::time::Duration;

/// Format a duration as fixed-decimal seconds, right-aligned
///
/// Width is `decimal_places + 4` so a 3-digit integer part still lines up;
/// longer values simply overflow the column.
pub fn format_duration(duration: Duration, decimal_places: usize) -> String {
    format!(
        "{:>width$.precision$}s",
        duration.as_secs_f64(),
        width = decimal_places + 4,
        precision = decimal_places
    )
}

/// Format an elapsed duration without padding, for step completion messages
pub fn format_elapsed(duration: Duration) -> String {
    format!("{:.3}s", duration.as_secs_f64())
}

/// Render the full analysis report as info lines
///
/// Min/max/median are annotated with their originating event names; the
/// mean has no single originating event. The histogram is bracketed by
/// `|` markers and followed by the filtered event count.
pub fn render_report(
    stats: &DurationStatistics,
    histogram: &Histogram,
    event_count: usize,
    decimal_places: usize,
) -> String {
    let lines = [
        format!(
            "Min:          {}  `{}`",
            format_duration(stats.min, decimal_places),
            stats.min_event
        ),
        format!(
            "Max:          {}  `{}`",
            format_duration(stats.max, decimal_places),
            stats.max_event
        ),
        format!(
            "Median:       {}  `{}`",
            format_duration(stats.median, decimal_places),
            stats.median_event
        ),
        format!("Mean:         {}", format_duration(stats.mean, decimal_places)),
        format!("Distribution:   |{}|", histogram.render()),
        format!("TU Count:       {}", event_count),
    ];

    lines
        .iter()
        .map(|line| info_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prefix a line with the two-space indent and info symbol
fn info_line(text: &str) -> String {
    format!("  ℹ {}", text)
}
