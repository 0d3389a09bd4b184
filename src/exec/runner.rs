//! Synchronous external command execution.
//!
//! Commands run to completion with stdout/stderr captured as text. A
//! nonzero exit is an [`ExecutionError`] carrying the captured stderr if
//! non-empty, otherwise the captured stdout. There is no retry, timeout,
//! or cancellation; a command runs until it exits.

use crate::utils::error::ExecutionError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Environment configuration for a spawned command
///
/// The environment is an explicit, enumerable part of the command's
/// contract rather than ambient global state, so tests can pin it down.
#[derive(Debug, Clone, Default)]
pub enum CommandEnv {
    /// Inherit the parent process environment
    #[default]
    Inherit,

    /// Start from an empty environment and set exactly these variables
    Explicit(Vec<(OsString, OsString)>),
}

/// An external command: program, ordered arguments, working directory,
/// and environment
#[derive(Debug, Clone)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
    workspace: PathBuf,
    env: CommandEnv,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, workspace: &Path) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            workspace: workspace.to_path_buf(),
            env: CommandEnv::default(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, env: CommandEnv) -> Self {
        self.env = env;
        self
    }

    /// The command line as a display string, for logging and errors
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Execute synchronously and return captured stdout
    ///
    /// # Errors
    /// * `ExecutionError::SpawnFailed` - the program could not be started
    /// * `ExecutionError::CommandFailed` - nonzero exit; carries stderr
    ///   text if non-empty, else stdout text
    pub fn run(&self) -> Result<String, ExecutionError> {
        let mut command = Command::new(&self.program);
        command.args(&self.args).current_dir(&self.workspace);

        if let CommandEnv::Explicit(vars) = &self.env {
            command.env_clear();
            command.envs(vars.iter().map(|(key, value)| (key, value)));
        }

        let output = command.output().map_err(|source| ExecutionError::SpawnFailed {
            command: self.display(),
            source,
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if output.status.success() {
            return Ok(stdout);
        }

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        let diagnostic = if stderr.is_empty() { stdout } else { stderr };
        Err(ExecutionError::CommandFailed {
            command: self.display(),
            status: output.status,
            diagnostic,
        })
    }
}
