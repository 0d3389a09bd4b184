//! Profile command implementation.
//!
//! A profiling pass per target:
//! 1. Generate + build through CMake/Ninja (skipped when prior build
//!    output exists and `--clean` was not given)
//! 2. Convert the Ninja build log into a trace file
//! 3. Analyze the trace and print the report
//!
//! Passes run strictly sequentially; the first error aborts the run.

use crate::analysis::FilterConfig;
use crate::build::{cmake_ninja_build, BuildOptions};
use crate::commands::analyze::analyze_trace;
use crate::trace::generate_trace;
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the profile command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ProfileArgs {
    /// Project workspace containing the top-level CMakeLists.txt
    pub workspace: PathBuf,

    /// CMake targets to profile, one pass each
    pub targets: Vec<String>,

    /// Extra arguments for the CMake generate step
    pub cmake_args: Vec<String>,

    /// Ordered include patterns (prefix-anchored)
    pub filter_in: Vec<String>,

    /// Ordered exclude patterns (prefix-anchored)
    pub filter_out: Vec<String>,

    /// Delete the build directory and build from scratch
    pub clean: bool,

    /// `CMAKE_UNITY_BUILD_BATCH_SIZE`; negative disables unity builds
    pub unity_size: i64,

    /// Decimal places for formatted durations
    pub decimal_places: usize,
}

/// Execute the profile command, one pass per target
pub fn execute_profile(args: &ProfileArgs) -> Result<()> {
    let start_time = Instant::now();

    let filter = FilterConfig::new(&args.filter_in, &args.filter_out)
        .context("Invalid filter pattern")?;

    for target in &args.targets {
        println!("{} - {}", args.workspace.display(), target);
        run_pass(args, &filter, target)?;
        println!();
    }

    info!(
        "Profiled {} target(s) in {:.2}s",
        args.targets.len(),
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

/// One complete profiling pass for a single target
fn run_pass(args: &ProfileArgs, filter: &FilterConfig, target: &str) -> Result<()> {
    let build_dir = format!("cmake-ninja-build-{}", target);
    let trace_filename = format!("{}.trace.json", target);

    // A previous build's .ninja_log is enough to profile from; rebuilding
    // is only forced by --clean. This is a deliberate skip, not an error.
    let ninja_log = args.workspace.join(&build_dir).join(".ninja_log");
    if args.clean || !ninja_log.exists() {
        cmake_ninja_build(&BuildOptions {
            workspace: args.workspace.clone(),
            build_dir: build_dir.clone(),
            generate_args: args.cmake_args.clone(),
            target: target.to_string(),
            unity_size: args.unity_size,
        })?;
    } else {
        println!("⚠ Skipped building");
    }

    let trace_path = generate_trace(&args.workspace, &build_dir, &trace_filename)?;
    let report = analyze_trace(&trace_path, filter, args.decimal_places)?;
    println!("{}", report);
    Ok(())
}

/// Validate profile arguments before executing
///
/// **Public** - can be called before execute_profile for early validation
pub fn validate_args(args: &ProfileArgs) -> Result<()> {
    if !args.workspace.is_dir() {
        anyhow::bail!(
            "Workspace `{}` does not exist or is not a directory",
            args.workspace.display()
        );
    }

    if args.targets.is_empty() {
        anyhow::bail!("At least one target is required");
    }

    if args.targets.iter().any(|t| t.is_empty()) {
        anyhow::bail!("Target names cannot be empty");
    }

    if args.decimal_places == 0 || args.decimal_places > 9 {
        anyhow::bail!("decimal-places must be between 1 and 9");
    }

    Ok(())
}
