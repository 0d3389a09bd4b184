//! Trace analysis: filtering, summary statistics, and histogram rendering.
//!
//! This module transforms a loaded trace into:
//! - A filtered, order-preserving event subset
//! - Min/max/mean/median durations with originating events
//! - A quantized glyph histogram of the duration distribution

pub mod filter;
pub mod histogram;
pub mod statistics;

// Re-export main types and functions
pub use filter::FilterConfig;
pub use histogram::Histogram;
pub use statistics::{compute_statistics, sorted_durations, DurationStatistics};
