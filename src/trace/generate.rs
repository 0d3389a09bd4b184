//! Trace generation via the external `ninjatracing` converter.
//!
//! The converter reads `<build_dir>/.ninja_log` and emits Chrome trace
//! JSON on stdout, which we write to a trace file in the workspace.

use crate::exec::{CommandSpec, Step};
use crate::utils::config::NINJATRACING_EXECUTABLE;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Run `ninjatracing` against the build log and write the trace file
///
/// Returns the path of the written trace file.
pub fn generate_trace(
    workspace: &Path,
    build_dir: &str,
    trace_filename: &str,
) -> Result<PathBuf> {
    let trace_path = workspace.join(trace_filename);

    Step::new(
        "Generating Ninja trace...",
        format!("Generated `{}`", trace_path.display()),
    )
    .run(|| {
        let trace = CommandSpec::new(NINJATRACING_EXECUTABLE, workspace)
            .arg(format!("{}/.ninja_log", build_dir))
            .run()
            .context("Failed to convert the Ninja build log")?;

        fs::write(&trace_path, trace)
            .with_context(|| format!("Failed to write trace file `{}`", trace_path.display()))?;
        Ok(())
    })?;

    Ok(trace_path)
}
