//! Trace event schema.
//!
//! The trace file is a Chrome-trace-style JSON array produced by the
//! external `ninjatracing` converter. Each record carries at least a
//! `name` and a `dur` (microseconds); everything else is ignored.

use serde::Deserialize;
use std::time::Duration;

/// One profiled unit of work (typically a single translation unit)
///
/// Events are immutable once loaded. No identity beyond `(name, duration)`
/// is tracked, so duplicate names and durations are valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEvent {
    /// Label identifying the profiled unit (e.g., an object file path)
    pub name: String,

    /// Wall-clock duration, microsecond precision
    pub duration: Duration,
}

impl TraceEvent {
    pub fn new(name: impl Into<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }
}

/// Raw record as it appears in the trace file
///
/// `dur` may be a JSON number or numeric text depending on the converter,
/// so it is kept as a raw value until validated by the loader.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub name: String,
    pub dur: serde_json::Value,
}
