//! # Output Resolution
//!
//! Decides where compiled output goes. Exactly one of two strategies applies:
//!
//! - **Single file**: an explicit output file is set. All sources compile as
//!   one unit into that file. This wins when an output directory is also set.
//! - **Mirrored directory**: only an output directory is set. Each source
//!   compiles on its own to the same relative path under the output
//!   directory, with its extension replaced by `.css`.
//!
//! With neither set the build cannot proceed and fails with a configuration
//! error.

use crate::error::{Error, Result};
use crate::path::mirrored_destination;
use std::path::{Path, PathBuf};

/// Where compiled output is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// One combined result at this path
    SingleFile(PathBuf),
    /// One result per source, mirrored under this directory
    Directory(PathBuf),
}

impl OutputTarget {
    /// Select the output strategy from the configured destinations.
    ///
    /// Empty paths count as unset.
    pub fn resolve(output_file: Option<&Path>, output_directory: Option<&Path>) -> Result<Self> {
        let output_file = output_file.filter(|p| !p.as_os_str().is_empty());
        let output_directory = output_directory.filter(|p| !p.as_os_str().is_empty());

        match (output_file, output_directory) {
            (Some(file), _) => Ok(OutputTarget::SingleFile(file.to_path_buf())),
            (None, Some(dir)) => Ok(OutputTarget::Directory(dir.to_path_buf())),
            (None, None) => Err(Error::Configuration {
                message: "either outputFile or outputDirectory must be set".to_string(),
                hint: Some("Pass --output-file or --output-directory".to_string()),
            }),
        }
    }

    pub fn is_single_file(&self) -> bool {
        matches!(self, OutputTarget::SingleFile(_))
    }

    /// The combined output file, in single-file mode
    pub fn output_file(&self) -> Option<&Path> {
        match self {
            OutputTarget::SingleFile(file) => Some(file),
            OutputTarget::Directory(_) => None,
        }
    }

    /// The mirrored output root, in directory mode
    pub fn output_dir(&self) -> Option<&Path> {
        match self {
            OutputTarget::SingleFile(_) => None,
            OutputTarget::Directory(dir) => Some(dir),
        }
    }

    /// Short human-readable name of the strategy
    pub fn mode_name(&self) -> &'static str {
        match self {
            OutputTarget::SingleFile(_) => "single file",
            OutputTarget::Directory(_) => "mirrored directory",
        }
    }

    /// Where the compiled form of `file` ends up.
    ///
    /// In single-file mode every source contributes to the same file.
    pub fn destination_for(&self, source_root: &Path, file: &Path) -> Result<PathBuf> {
        match self {
            OutputTarget::SingleFile(output) => Ok(output.clone()),
            OutputTarget::Directory(dir) => mirrored_destination(source_root, dir, file),
        }
    }
}
