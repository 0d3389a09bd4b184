//! Event filtering with ordered include/exclude pattern lists.
//!
//! Patterns are prefix-anchored: a pattern matches if it matches starting
//! at the beginning of the event name, not necessarily to the end. Include
//! patterns are applied sequentially (each pass narrows further, so the
//! result is their intersection), then exclude patterns remove matches.

use crate::trace::TraceEvent;
use log::debug;
use regex::Regex;

/// Compiled include/exclude pattern lists
///
/// An empty include list matches everything; an empty exclude list
/// excludes nothing. Patterns are immutable after compilation.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    include: Vec<Regex>,
    exclude: Vec<Regex>,
}

impl FilterConfig {
    /// Compile ordered include and exclude pattern lists
    ///
    /// # Errors
    /// Returns the `regex` compile error for the first invalid pattern.
    pub fn new<I, E>(include: &[I], exclude: &[E]) -> Result<Self, regex::Error>
    where
        I: AsRef<str>,
        E: AsRef<str>,
    {
        Ok(Self {
            include: compile_patterns(include)?,
            exclude: compile_patterns(exclude)?,
        })
    }

    /// Apply the filters, returning an order-preserving subsequence
    ///
    /// An empty result is not an error here; emptiness is detected
    /// downstream when statistics are requested.
    pub fn apply(&self, mut events: Vec<TraceEvent>) -> Vec<TraceEvent> {
        let initial = events.len();

        for pattern in &self.include {
            events.retain(|event| pattern.is_match(&event.name));
        }
        for pattern in &self.exclude {
            events.retain(|event| !pattern.is_match(&event.name));
        }

        debug!("Filtered {} events down to {}", initial, events.len());
        events
    }
}

/// Compile each pattern anchored at the start of the string
fn compile_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Regex>, regex::Error> {
    patterns
        .iter()
        .map(|pattern| Regex::new(&format!("^(?:{})", pattern.as_ref())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::config::DEFAULT_FILTER_OUT;
    use std::time::Duration;

    fn event(name: &str) -> TraceEvent {
        TraceEvent::new(name, Duration::from_micros(100))
    }

    fn names(events: &[TraceEvent]) -> Vec<&str> {
        events.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_include_is_prefix_anchored() {
        let filter = FilterConfig::new(&["src/"], &[] as &[&str]).unwrap();
        let events = vec![event("src/a.o"), event("lib/src/b.o")];

        // "src/" must match from the start; it is not a substring search
        assert_eq!(names(&filter.apply(events)), vec!["src/a.o"]);
    }

    #[test]
    fn test_include_need_not_match_full_name() {
        let filter = FilterConfig::new(&["src"], &[] as &[&str]).unwrap();
        let events = vec![event("src/deep/path/a.o")];
        assert_eq!(filter.apply(events).len(), 1);
    }

    #[test]
    fn test_sequential_includes_intersect() {
        let sequential = FilterConfig::new(&[r".*\.o$", r".*b"], &[] as &[&str]).unwrap();
        let reversed = FilterConfig::new(&[r".*b", r".*\.o$"], &[] as &[&str]).unwrap();
        let events = vec![event("a.o"), event("b.o"), event("b.txt"), event("ab.o")];

        let first_events = sequential.apply(events.clone());
        let first = names(&first_events);
        let second_events = reversed.apply(events);
        let second = names(&second_events);

        // Order of include passes does not change the result set
        assert_eq!(first, vec!["b.o", "ab.o"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_include_matches_everything() {
        let filter = FilterConfig::new(&[] as &[&str], &[] as &[&str]).unwrap();
        let events = vec![event("a.o"), event("b.txt")];
        assert_eq!(filter.apply(events).len(), 2);
    }

    #[test]
    fn test_exclude_removes_matches() {
        let filter = FilterConfig::new(&[] as &[&str], &[".*modules.*"]).unwrap();
        let events = vec![event("src/modules/a.o"), event("src/app/b.o")];
        assert_eq!(names(&filter.apply(events)), vec!["src/app/b.o"]);
    }

    #[test]
    fn test_exclude_is_idempotent() {
        let once = FilterConfig::new(&[] as &[&str], &[".*tests.*"]).unwrap();
        let twice = FilterConfig::new(&[] as &[&str], &[".*tests.*", ".*tests.*"]).unwrap();
        let events = vec![event("tests/a.o"), event("src/b.o")];

        assert_eq!(
            names(&once.apply(events.clone())),
            names(&twice.apply(events))
        );
    }

    #[test]
    fn test_default_exclude_matches_nothing() {
        let filter = FilterConfig::new(&[] as &[&str], &[DEFAULT_FILTER_OUT]).unwrap();
        let events = vec![event("a.o"), event("anything at all")];
        assert_eq!(filter.apply(events).len(), 2);
    }

    #[test]
    fn test_order_preserved() {
        let filter = FilterConfig::new(&[r".*\.o$"], &[] as &[&str]).unwrap();
        let events = vec![event("c.o"), event("x.txt"), event("a.o"), event("b.o")];
        assert_eq!(names(&filter.apply(events)), vec!["c.o", "a.o", "b.o"]);
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        assert!(FilterConfig::new(&["("], &[] as &[&str]).is_err());
    }
}
