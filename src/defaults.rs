//! Default values for recess-build settings.
//!
//! This module provides centralized default values used by the settings
//! loader and the CLI, ensuring both agree on project conventions.

use std::path::PathBuf;

/// Default settings file name, looked up in the project directory.
pub const DEFAULT_CONFIG_FILENAME: &str = "recess.yaml";

/// Default program used to run the style-sheet engine.
pub const DEFAULT_ENGINE_PROGRAM: &str = "recess";

/// Name of the engine configuration file written into the staging directory.
pub const ENGINE_CONFIG_FILENAME: &str = ".recessrc";

/// Include patterns used when none are configured.
pub fn default_includes() -> Vec<String> {
    vec!["**/*.less".to_string(), "**/*.css".to_string()]
}

/// Exclude patterns used when none are configured (none).
pub fn default_excludes() -> Vec<String> {
    Vec::new()
}

/// Conventional source root, relative to the project directory.
pub fn default_source_directory() -> PathBuf {
    PathBuf::from("src").join("main").join("less")
}

/// Conventional output root for mirrored output, relative to the project
/// directory.
pub fn default_output_directory() -> Option<PathBuf> {
    Some(
        PathBuf::from("target")
            .join("generated-sources")
            .join("recess"),
    )
}

/// Working area handed to the engine for intermediate artifacts.
pub fn default_staging_directory() -> PathBuf {
    PathBuf::from("target").join("recess")
}
