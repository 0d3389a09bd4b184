//! External process execution and scoped timed steps.

pub mod runner;
pub mod step;

// Re-export main types
pub use runner::{CommandEnv, CommandSpec};
pub use step::Step;
