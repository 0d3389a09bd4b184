//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod analyze;
pub mod profile;

// Re-export main command functions
pub use analyze::{analyze_trace, execute_analyze, AnalyzeArgs};
pub use profile::{execute_profile, validate_args, ProfileArgs};
