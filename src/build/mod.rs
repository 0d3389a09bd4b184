//! CMake/Ninja build orchestration.
//!
//! Drives the two-phase CMake flow: generate a Ninja Multi-Config build
//! tree, then build the requested target in Release. Each phase is a
//! scoped step so the operator sees elapsed time and failures inline.

use crate::exec::{CommandSpec, Step};
use crate::utils::config::{CMAKE_BUILD_CONFIG, CMAKE_GENERATOR};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Options for one CMake/Ninja build
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Project root containing the top-level CMakeLists.txt
    pub workspace: PathBuf,

    /// Build directory name, relative to the workspace
    pub build_dir: String,

    /// Extra arguments passed to the CMake generate step
    pub generate_args: Vec<String>,

    /// CMake target to build
    pub target: String,

    /// `CMAKE_UNITY_BUILD_BATCH_SIZE` value; negative disables unity builds
    pub unity_size: i64,
}

/// Generate the build tree and build the target
pub fn cmake_ninja_build(options: &BuildOptions) -> Result<()> {
    generate(options)?;
    build(options)
}

/// Run the CMake generate step into a fresh build directory
///
/// An existing build directory is deleted first so the generate step
/// always starts from scratch.
fn generate(options: &BuildOptions) -> Result<()> {
    Step::new(
        "Generating Ninja build...",
        format!(
            "Generated `{}`",
            options.workspace.join(&options.build_dir).display()
        ),
    )
    .run(|| {
        let build_path = options.workspace.join(&options.build_dir);
        if build_path.exists() {
            fs::remove_dir_all(&build_path).with_context(|| {
                format!("Failed to delete build directory `{}`", build_path.display())
            })?;
        }

        let mut spec = CommandSpec::new("cmake", &options.workspace)
            .args(["-B", options.build_dir.as_str(), "-G", CMAKE_GENERATOR])
            .args(options.generate_args.iter().cloned());

        if options.unity_size >= 0 {
            spec = spec.args([
                "-DCMAKE_UNITY_BUILD=ON".to_string(),
                format!("-DCMAKE_UNITY_BUILD_BATCH_SIZE={}", options.unity_size),
            ]);
        } else {
            spec = spec.arg("-DCMAKE_UNITY_BUILD=OFF");
        }

        spec.run().context("CMake generate step failed")?;
        Ok(())
    })
}

/// Build the target through CMake's build driver
fn build(options: &BuildOptions) -> Result<()> {
    Step::new(
        format!("Building `{}`...", options.target),
        format!("Built target `{}`", options.target),
    )
    .run(|| {
        CommandSpec::new("cmake", &options.workspace)
            .args([
                "--build",
                options.build_dir.as_str(),
                "--config",
                CMAKE_BUILD_CONFIG,
                "--target",
                options.target.as_str(),
            ])
            .run()
            .with_context(|| format!("Build of target `{}` failed", options.target))?;
        Ok(())
    })
}
