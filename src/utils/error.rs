//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors that can occur while executing external commands
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Failed to spawn `{command}`: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command exited nonzero. `diagnostic` carries the captured
    /// stderr if it was non-empty, otherwise the captured stdout.
    #[error("`{command}` failed ({status}): {diagnostic}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        diagnostic: String,
    },
}

/// Errors that can occur during trace loading
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read trace file `{path}`: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid trace format: {0}")]
    InvalidFormat(String),
}

/// Errors that can occur during statistics computation
#[derive(Error, Debug)]
pub enum StatisticsError {
    /// Min/max/mean/median over zero elements is undefined. Usually means
    /// the include/exclude filters removed every trace event.
    #[error("No trace events matched the filters; statistics over an empty set are undefined")]
    EmptyInput,
}
