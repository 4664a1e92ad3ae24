//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `recess-build` command-line tool. Each subcommand is defined in its own
//! file with an `Args` struct derived using `clap` and an `execute` function.
//!
//! The settings flags shared by `compile` and `ls` live here in
//! [`SettingsArgs`]. Precedence is CLI flag > environment variable >
//! `recess.yaml` > defaults.

pub mod compile;
pub mod completions;
pub mod ls;

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use recess_build::config::{self, BuildSettings};
use recess_build::defaults::DEFAULT_CONFIG_FILENAME;

/// Settings flags shared by commands that resolve a build
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Settings file (defaults to recess.yaml in the project directory)
    #[arg(short, long, value_name = "FILE", env = "RECESS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory relative paths are resolved against (defaults to the current directory)
    #[arg(long, value_name = "DIR", env = "RECESS_PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,

    /// Root scanned for style-sheets
    #[arg(long, value_name = "DIR", env = "RECESS_SOURCE_DIRECTORY")]
    pub source_directory: Option<PathBuf>,

    /// Mirror each style-sheet under this directory as .css
    #[arg(long, value_name = "DIR", env = "RECESS_OUTPUT_DIRECTORY")]
    pub output_directory: Option<PathBuf>,

    /// Compile everything into this single file (wins over --output-directory)
    #[arg(long, value_name = "FILE", env = "RECESS_OUTPUT_FILE")]
    pub output_file: Option<PathBuf>,

    /// Working directory for the engine's intermediate files
    #[arg(long, value_name = "DIR", env = "RECESS_STAGING_DIRECTORY")]
    pub staging_directory: Option<PathBuf>,

    /// Include pattern relative to the source directory (repeatable)
    #[arg(long = "include", value_name = "PATTERN")]
    pub includes: Vec<String>,

    /// Exclude pattern relative to the source directory (repeatable)
    #[arg(long = "exclude", value_name = "PATTERN")]
    pub excludes: Vec<String>,

    /// Compress the compiled output
    #[arg(long, value_name = "BOOL", env = "RECESS_COMPRESS")]
    pub compress: Option<bool>,

    /// Don't complain about IDs in selectors
    #[arg(long, value_name = "BOOL", env = "RECESS_NO_IDS")]
    pub no_ids: Option<bool>,

    /// Don't complain about .js- prefixed class names
    #[arg(long, value_name = "BOOL", env = "RECESS_NO_JS_PREFIX")]
    pub no_js_prefix: Option<bool>,

    /// Don't complain about overqualified selectors
    #[arg(long, value_name = "BOOL", env = "RECESS_NO_OVERQUALIFYING")]
    pub no_overqualifying: Option<bool>,

    /// Don't complain about underscores in class names
    #[arg(long, value_name = "BOOL", env = "RECESS_NO_UNDERSCORES")]
    pub no_underscores: Option<bool>,

    /// Don't complain about the universal selector
    #[arg(long, value_name = "BOOL", env = "RECESS_NO_UNIVERSAL_SELECTORS")]
    pub no_universal_selectors: Option<bool>,

    /// Line up vendor-prefixed properties
    #[arg(long, value_name = "BOOL", env = "RECESS_PREFIX_WHITESPACE")]
    pub prefix_whitespace: Option<bool>,

    /// Check property ordering
    #[arg(long, value_name = "BOOL", env = "RECESS_STRICT_PROPERTY_ORDER")]
    pub strict_property_order: Option<bool>,

    /// Strip colours from engine output
    #[arg(long, value_name = "BOOL", env = "RECESS_STRIP_COLORS")]
    pub strip_colors: Option<bool>,

    /// Don't complain about units on zero values
    #[arg(long, value_name = "BOOL", env = "RECESS_ZERO_UNITS")]
    pub zero_units: Option<bool>,
}

impl SettingsArgs {
    /// Project directory, absolute
    pub fn project_dir(&self) -> Result<PathBuf> {
        let dir = match &self.project_dir {
            Some(dir) => dir.clone(),
            None => PathBuf::from("."),
        };
        std::path::absolute(&dir)
            .with_context(|| format!("Failed to resolve project directory {}", dir.display()))
    }

    /// Load the settings file and apply flag overrides, with every path
    /// resolved against the project directory
    pub fn load(&self) -> Result<BuildSettings> {
        let project_dir = self.project_dir()?;

        let settings = match &self.config {
            Some(path) => config::load(path, true)?,
            None => config::load(&project_dir.join(DEFAULT_CONFIG_FILENAME), false)?,
        };

        Ok(self.apply(settings).resolve_against(&project_dir))
    }

    /// Overlay the flags that were given on top of `settings`
    pub fn apply(&self, mut settings: BuildSettings) -> BuildSettings {
        if let Some(dir) = &self.source_directory {
            settings.source_directory = dir.clone();
        }
        if let Some(dir) = &self.output_directory {
            settings.output_directory = Some(dir.clone());
        }
        if let Some(file) = &self.output_file {
            settings.output_file = Some(file.clone());
        }
        if let Some(dir) = &self.staging_directory {
            settings.staging_directory = dir.clone();
        }
        if !self.includes.is_empty() {
            settings.includes = self.includes.clone();
        }
        if !self.excludes.is_empty() {
            settings.excludes = self.excludes.clone();
        }

        let lint = &mut settings.lint;
        let overrides = [
            (self.compress, &mut lint.compress),
            (self.no_ids, &mut lint.no_ids),
            (self.no_js_prefix, &mut lint.no_js_prefix),
            (self.no_overqualifying, &mut lint.no_overqualifying),
            (self.no_underscores, &mut lint.no_underscores),
            (self.no_universal_selectors, &mut lint.no_universal_selectors),
            (self.prefix_whitespace, &mut lint.prefix_whitespace),
            (self.strict_property_order, &mut lint.strict_property_order),
            (self.strip_colors, &mut lint.strip_colors),
            (self.zero_units, &mut lint.zero_units),
        ];
        for (flag, value) in overrides {
            if let Some(flag) = flag {
                *value = flag;
            }
        }

        settings
    }
}
