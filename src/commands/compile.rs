//! Compile command implementation
//!
//! Resolves the build settings and runs the build step against the host
//! filesystem with the recess engine:
//! 1. Validate the source directory
//! 2. Enumerate style-sheets
//! 3. Create the staging directory
//! 4. Assemble the lint configuration
//! 5. Resolve the output target
//! 6. Run the engine

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

use recess_build::defaults::DEFAULT_ENGINE_PROGRAM;
use recess_build::engine::RecessEngine;
use recess_build::filesystem::DiskFS;
use recess_build::orchestrator;
use recess_build::report::Reporter;

use super::SettingsArgs;

/// Arguments for the compile command
#[derive(Args, Debug)]
pub struct CompileArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Program that runs the recess engine
    #[arg(long, value_name = "PROGRAM", env = "RECESS_ENGINE", default_value = DEFAULT_ENGINE_PROGRAM)]
    pub engine: PathBuf,

    /// Argument placed before the engine options, e.g. the recess script when
    /// --engine is node (repeatable)
    #[arg(long = "engine-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub engine_args: Vec<String>,

    /// Show detailed progress information
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the compile command
pub fn execute(args: CompileArgs, color_flag: &str) -> Result<()> {
    let reporter = Reporter::from_env_and_flag(color_flag, args.quiet);
    let start_time = Instant::now();

    let settings = args.settings.load()?;
    if args.verbose {
        reporter.step(
            "📂",
            "[SRC]",
            &format!("Source directory: {}", settings.source_directory.display()),
        );
    }

    let engine = RecessEngine::new(&args.engine).with_args(args.engine_args.iter().cloned());

    match orchestrator::execute(&settings, &DiskFS, &engine) {
        Ok(()) => {
            let destination = settings
                .output_file
                .as_ref()
                .or(settings.output_directory.as_ref())
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            reporter.success(&format!(
                "Compiled style-sheets into {} in {:.2}s",
                destination,
                start_time.elapsed().as_secs_f64()
            ));
            Ok(())
        }
        Err(e) => {
            reporter.failure("Compile failed");
            Err(e.into())
        }
    }
}
