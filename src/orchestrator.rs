//! Orchestrator for one build step
//!
//! This module wires source enumeration, configuration assembly and output
//! resolution together and hands the result to the compiler engine exactly
//! once. Everything runs synchronously on the calling thread.

use log::debug;

use crate::config::BuildSettings;
use crate::engine::{CompilationRequest, CompilerEngine};
use crate::error::Result;
use crate::filesystem::SourceTree;
use crate::lint;
use crate::sources;
use crate::target::OutputTarget;

/// Execute the build step
///
/// 1. Validate the source directory
/// 2. Enumerate the style-sheets
/// 3. Ensure the staging directory exists
/// 4. Assemble the lint configuration
/// 5. Resolve the output target, rejecting colliding mirrored destinations
/// 6. Invoke the engine once with the full request
///
/// Validation failures abort before the engine is invoked. Engine errors are
/// returned unmodified.
pub fn execute(
    settings: &BuildSettings,
    tree: &dyn SourceTree,
    engine: &dyn CompilerEngine,
) -> Result<()> {
    let source_root = sources::resolve_root(&settings.source_directory)?;
    let files = sources::enumerate(tree, &source_root, &settings.includes, &settings.excludes)?;

    tree.create_dir_all(&settings.staging_directory)?;

    let config = lint::assemble(&settings.lint);
    let target = resolve_target(settings)?;

    let request = CompilationRequest {
        files,
        config,
        target,
        source_root,
        staging_dir: settings.staging_directory.clone(),
    };
    if !request.is_single_file() {
        request.destinations()?;
    }

    engine.compile(request)
}

/// Compute the request `execute` would hand to the engine.
///
/// Read-only: the staging directory is not created and no engine runs.
pub fn plan(settings: &BuildSettings, tree: &dyn SourceTree) -> Result<CompilationRequest> {
    let source_root = sources::resolve_root(&settings.source_directory)?;
    let files = sources::enumerate(tree, &source_root, &settings.includes, &settings.excludes)?;
    let target = resolve_target(settings)?;

    Ok(CompilationRequest {
        files,
        config: lint::assemble(&settings.lint),
        target,
        source_root,
        staging_dir: settings.staging_directory.clone(),
    })
}

fn resolve_target(settings: &BuildSettings) -> Result<OutputTarget> {
    let target = OutputTarget::resolve(
        settings.output_file.as_deref(),
        settings.output_directory.as_deref(),
    )?;

    match &target {
        OutputTarget::SingleFile(file) => debug!(
            "outputFile found; writing the combined result to {}",
            file.display()
        ),
        OutputTarget::Directory(dir) => debug!(
            "outputFile not set; mirroring sources under {} with the .css extension",
            dir.display()
        ),
    }

    Ok(target)
}
