//! Trace file loading and decoding.
//!
//! Reads a trace file from disk and decodes the JSON array of records
//! into an ordered sequence of [`TraceEvent`], preserving source order.
//! Any structural problem aborts the load; no partial results.

use super::schema::{RawRecord, TraceEvent};
use crate::utils::error::ParseError;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Load a trace file and decode it into an ordered sequence of events
///
/// # Errors
/// * `ParseError::FileUnreadable` - the file cannot be opened or read
/// * `ParseError::JsonError` - the contents are not valid JSON
/// * `ParseError::InvalidFormat` - not an array, or a record is missing
///   `name`/`dur` or carries a non-numeric or negative `dur`
pub fn load_trace(path: &Path) -> Result<Vec<TraceEvent>, ParseError> {
    let contents = fs::read_to_string(path).map_err(|source| ParseError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let events = parse_trace(&contents)?;
    debug!("Loaded {} trace events from {}", events.len(), path.display());
    Ok(events)
}

/// Decode trace JSON text into events, preserving record order
pub fn parse_trace(contents: &str) -> Result<Vec<TraceEvent>, ParseError> {
    let root: serde_json::Value = serde_json::from_str(contents)?;

    let records = root.as_array().ok_or_else(|| {
        ParseError::InvalidFormat("Trace must be a JSON array of records".to_string())
    })?;

    let mut events = Vec::with_capacity(records.len());
    for (index, value) in records.iter().enumerate() {
        events.push(parse_record(index, value)?);
    }
    Ok(events)
}

/// Parse one record, validating the required `name` and `dur` fields
fn parse_record(index: usize, value: &serde_json::Value) -> Result<TraceEvent, ParseError> {
    let record = RawRecord::deserialize(value).map_err(|e| {
        ParseError::InvalidFormat(format!("Record {}: {}", index, e))
    })?;

    let micros = parse_duration_micros(&record.dur)
        .map_err(|e| ParseError::InvalidFormat(format!("Record {} (`{}`): {}", index, record.name, e)))?;

    Ok(TraceEvent {
        name: record.name,
        duration: Duration::from_secs_f64(micros / 1_000_000.0),
    })
}

/// Interpret a `dur` value as non-negative microseconds
///
/// Accepts a JSON number or numeric text; fractional microseconds are kept.
/// Values too large to represent as a `Duration` are rejected here so the
/// conversion below can never panic.
fn parse_duration_micros(value: &serde_json::Value) -> Result<f64, String> {
    let micros = if let Some(n) = value.as_f64() {
        n
    } else if let Some(s) = value.as_str() {
        s.parse::<f64>()
            .map_err(|e| format!("invalid `dur` value {:?}: {}", s, e))?
    } else {
        return Err(format!("`dur` must be a number or numeric text, found {}", value));
    };

    if !micros.is_finite() || micros < 0.0 {
        return Err(format!("`dur` must be a finite non-negative number, found {}", micros));
    }
    if micros / 1_000_000.0 > u64::MAX as f64 {
        return Err(format!("`dur` value {} is too large to represent", micros));
    }
    Ok(micros)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trace_preserves_order() {
        let events = parse_trace(
            r#"[{"name": "b.o", "dur": 200}, {"name": "a.o", "dur": 100}]"#,
        )
        .unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name, "b.o");
        assert_eq!(events[1].name, "a.o");
    }

    #[test]
    fn test_parse_trace_numeric_text_dur() {
        let events = parse_trace(r#"[{"name": "a.o", "dur": "1500.5"}]"#).unwrap();
        assert_eq!(events[0].duration, Duration::from_secs_f64(1500.5 / 1e6));
    }

    #[test]
    fn test_parse_trace_ignores_unknown_fields() {
        let events = parse_trace(
            r#"[{"name": "a.o", "dur": 100, "ph": "X", "ts": 0, "tid": 1}]"#,
        )
        .unwrap();
        assert_eq!(events[0].name, "a.o");
    }

    #[test]
    fn test_parse_trace_missing_dur_fails() {
        let result = parse_trace(r#"[{"name": "a.o"}]"#);
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_trace_missing_name_fails() {
        let result = parse_trace(r#"[{"dur": 100}]"#);
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_trace_negative_dur_fails() {
        let result = parse_trace(r#"[{"name": "a.o", "dur": -5}]"#);
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_trace_unrepresentable_dur_fails() {
        let result = parse_trace(r#"[{"name": "a.o", "dur": 1e30}]"#);
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_trace_not_an_array_fails() {
        let result = parse_trace(r#"{"name": "a.o", "dur": 100}"#);
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_trace_invalid_json_fails() {
        let result = parse_trace("not json");
        assert!(matches!(result, Err(ParseError::JsonError(_))));
    }
}
