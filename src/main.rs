//! Ninja Build Profiler CLI
//!
//! Profiles CMake/Ninja builds: builds the requested targets, converts
//! each Ninja build log into a timing trace, and prints duration
//! statistics with a compact distribution histogram.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use ninja_build_profiler::commands::{analyze, profile, AnalyzeArgs, ProfileArgs};
use ninja_build_profiler::utils::config::{
    DEFAULT_DECIMAL_PLACES, DEFAULT_FILTER_IN, DEFAULT_FILTER_OUT,
};

/// Ninja Build Profiler - build-time profiling for CMake/Ninja builds
#[derive(Parser, Debug)]
#[command(name = "ninja-profile")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build, trace, and analyze one or more CMake targets
    Profile {
        /// Workspace containing the top-level CMakeLists.txt
        #[arg(short, long, default_value = ".")]
        workspace: PathBuf,

        /// CMake targets to profile (one pass each)
        #[arg(short, long, num_args = 1.., default_values_t = [String::from("all")])]
        targets: Vec<String>,

        /// Additional CMake args for the generate step
        #[arg(long, num_args = 0..)]
        cmake_args: Vec<String>,

        /// Include patterns (prefix-anchored regex)
        #[arg(long, num_args = 0.., default_values_t = [String::from(DEFAULT_FILTER_IN)])]
        filter_regexes: Vec<String>,

        /// Exclude patterns (prefix-anchored regex)
        #[arg(long, num_args = 0.., default_values_t = [String::from(DEFAULT_FILTER_OUT)])]
        filter_out_regexes: Vec<String>,

        /// Delete the build directory and build from scratch
        #[arg(long)]
        clean: bool,

        /// CMAKE_UNITY_BUILD_BATCH_SIZE; negative disables unity builds
        #[arg(long, default_value = "-1", allow_hyphen_values = true)]
        unity_size: i64,

        /// Decimal places for formatted durations
        #[arg(long, default_value_t = DEFAULT_DECIMAL_PLACES)]
        decimal_places: usize,
    },

    /// Analyze an existing trace file
    Analyze {
        /// Path to the trace file
        #[arg(short, long)]
        file: PathBuf,

        /// Include patterns (prefix-anchored regex)
        #[arg(long, num_args = 0.., default_values_t = [String::from(DEFAULT_FILTER_IN)])]
        filter_regexes: Vec<String>,

        /// Exclude patterns (prefix-anchored regex)
        #[arg(long, num_args = 0.., default_values_t = [String::from(DEFAULT_FILTER_OUT)])]
        filter_out_regexes: Vec<String>,

        /// Decimal places for formatted durations
        #[arg(long, default_value_t = DEFAULT_DECIMAL_PLACES)]
        decimal_places: usize,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Profile {
            workspace,
            targets,
            cmake_args,
            filter_regexes,
            filter_out_regexes,
            clean,
            unity_size,
            decimal_places,
        } => {
            let args = ProfileArgs {
                workspace,
                targets,
                cmake_args,
                filter_in: filter_regexes,
                filter_out: filter_out_regexes,
                clean,
                unity_size,
                decimal_places,
            };

            // Validate args first
            profile::validate_args(&args)?;

            profile::execute_profile(&args)?;
        }

        Commands::Analyze {
            file,
            filter_regexes,
            filter_out_regexes,
            decimal_places,
        } => {
            let args = AnalyzeArgs {
                trace_path: file,
                filter_in: filter_regexes,
                filter_out: filter_out_regexes,
                decimal_places,
            };

            // Validate args first
            analyze::validate_args(&args)?;

            analyze::execute_analyze(&args)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("Ninja Build Profiler v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build-time profiling for CMake/Ninja builds.");
    println!("Requires `cmake`, `ninja`, and `ninjatracing` on PATH for profiling.");
}
