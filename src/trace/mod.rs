//! Trace generation, loading, and schema definitions.
//!
//! This module handles:
//! - Driving `ninjatracing` to produce a trace file from a Ninja build log
//! - Decoding the trace file into an ordered event sequence
//! - Validating the record shape

pub mod generate;
pub mod loader;
pub mod schema;

// Re-export main types
pub use generate::generate_trace;
pub use loader::{load_trace, parse_trace};
pub use schema::TraceEvent;
