//! # Ls Command Implementation
//!
//! This module implements the `ls` subcommand, which lists the style-sheets a
//! build would compile and where their output would be written.
//!
//! This command is a safe, read-only operation: it neither creates the
//! staging directory nor runs the engine.

use anyhow::Result;
use clap::Args;

use recess_build::filesystem::DiskFS;
use recess_build::orchestrator;
use recess_build::path::normalize_relative;

use super::SettingsArgs;

/// List the style-sheets a build would compile
#[derive(Args, Debug)]
pub struct LsArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Show each source with its output destination.
    #[arg(short, long)]
    pub long: bool,

    /// Show only the total count of files.
    #[arg(long)]
    pub count: bool,
}

/// Execute the `ls` command.
pub fn execute(args: LsArgs) -> Result<()> {
    let settings = args.settings.load()?;
    let request = orchestrator::plan(&settings, &DiskFS)?;

    if args.count {
        println!("{}", request.files().len());
        return Ok(());
    }

    if request.files().is_empty() {
        println!("No style-sheets matched.");
        return Ok(());
    }

    for (source, destination) in request.destinations()? {
        let relative = source
            .strip_prefix(&request.source_root)
            .map(normalize_relative)
            .unwrap_or_else(|_| source.display().to_string());
        if args.long {
            println!("{} -> {}", relative, destination.display());
        } else {
            println!("{}", relative);
        }
    }

    println!();
    println!(
        "{} style-sheet(s), {} output",
        request.files().len(),
        request.target.mode_name()
    );

    Ok(())
}
