//! Analyze command implementation.
//!
//! Runs the analysis pipeline over an existing trace file:
//! load -> filter -> statistics -> histogram -> report.
//! The same pipeline is reused by the profile command after each build.

use crate::analysis::{compute_statistics, sorted_durations, FilterConfig, Histogram};
use crate::exec::Step;
use crate::report::render_report;
use crate::trace::load_trace;
use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// Arguments for the analyze command
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Trace file to analyze
    pub trace_path: PathBuf,

    /// Ordered include patterns (prefix-anchored)
    pub filter_in: Vec<String>,

    /// Ordered exclude patterns (prefix-anchored)
    pub filter_out: Vec<String>,

    /// Decimal places for formatted durations
    pub decimal_places: usize,
}

/// Validate analyze arguments before executing
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.trace_path.as_os_str().is_empty() {
        anyhow::bail!("Trace file path cannot be empty");
    }

    if args.decimal_places == 0 || args.decimal_places > 9 {
        anyhow::bail!("decimal-places must be between 1 and 9");
    }

    Ok(())
}

/// Execute the analyze command
pub fn execute_analyze(args: &AnalyzeArgs) -> Result<()> {
    let filter = FilterConfig::new(&args.filter_in, &args.filter_out)
        .context("Invalid filter pattern")?;

    let report = analyze_trace(&args.trace_path, &filter, args.decimal_places)?;
    println!("{}", report);
    Ok(())
}

/// Run the analysis pipeline and render the report
///
/// The pipeline is a pure function of the trace file and filters:
/// repeated runs on unchanged input produce identical output.
///
/// # Errors
/// * `ParseError` - the trace file is missing or malformed
/// * `StatisticsError` - the filters left no events to analyze
pub fn analyze_trace(
    trace_path: &Path,
    filter: &FilterConfig,
    decimal_places: usize,
) -> Result<String> {
    let step_text = format!("Parsing `{}`...", trace_path.display());
    let success_text = format!("Parsed `{}`", trace_path.display());

    let (stats, histogram, event_count) = Step::new(step_text, success_text).run(|| {
        let events = load_trace(trace_path)?;
        let filtered = filter.apply(events);

        let stats = compute_statistics(&filtered)?;
        let histogram = Histogram::from_durations(&sorted_durations(&filtered));

        debug!("Analyzed {} filtered events", filtered.len());
        Ok((stats, histogram, filtered.len()))
    })?;

    Ok(render_report(&stats, &histogram, event_count, decimal_places))
}
