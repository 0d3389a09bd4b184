//! Ninja Build Profiler
//!
//! Build-time profiling for CMake/Ninja builds: drives a build, converts
//! the Ninja build log into a timing trace, and summarizes per-translation-
//! unit compile durations into statistics and a glyph histogram.
//!
//! This crate provides the core implementation for the
//! `ninja-profile` CLI tool.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install ninja-build-profiler
//! ninja-profile --help
//! ```

pub mod analysis;
pub mod build;
pub mod commands;
pub mod exec;
pub mod report;
pub mod trace;
pub mod utils;
