//! # Compiler Engine
//!
//! The style-sheet engine parses, lints and compiles LESS/CSS sources and
//! writes the results. This crate treats it as opaque and talks to it through
//! the narrow [`CompilerEngine`] trait, so the orchestrator can be exercised
//! against a fake without running any real style-sheet tooling.
//!
//! [`RecessEngine`] is the default implementation. It drives the `recess`
//! command line (a Node.js program) through `std::process::Command`:
//!
//! 1.  The lint configuration is written as JSON to `.recessrc` in the
//!     staging directory and passed with `--config`.
//! 2.  In single-file mode one process compiles every source and its
//!     standard output becomes the output file.
//! 3.  In mirrored mode the sources are compiled one after another, each
//!     standard output written to the mirrored destination.
//!
//! A source that fails to compile aborts the run; files already written stay
//! where they are.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, info, warn};

use crate::defaults::{DEFAULT_ENGINE_PROGRAM, ENGINE_CONFIG_FILENAME};
use crate::error::{Error, Result};
use crate::lint::LintConfiguration;
use crate::sources::SourceFileSet;
use crate::target::OutputTarget;

/// Everything the engine needs for one build.
///
/// Built once by the orchestrator and handed over by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationRequest {
    pub files: SourceFileSet,
    pub config: LintConfiguration,
    pub target: OutputTarget,
    /// Absolute source root the files were enumerated from
    pub source_root: PathBuf,
    pub staging_dir: PathBuf,
}

impl CompilationRequest {
    pub fn files(&self) -> &SourceFileSet {
        &self.files
    }

    pub fn config(&self) -> &LintConfiguration {
        &self.config
    }

    pub fn output_file(&self) -> Option<&Path> {
        self.target.output_file()
    }

    pub fn is_single_file(&self) -> bool {
        self.target.is_single_file()
    }

    pub fn staging_dir(&self) -> &Path {
        &self.staging_dir
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.target.output_dir()
    }

    /// Pair every source with where its compiled form is written.
    ///
    /// In mirrored mode two sources differing only by extension would write
    /// the same file; that is rejected as a configuration error.
    pub fn destinations(&self) -> Result<Vec<(PathBuf, PathBuf)>> {
        let pairs = self
            .files
            .iter()
            .map(|file| {
                let destination = self.target.destination_for(&self.source_root, file)?;
                Ok((file.clone(), destination))
            })
            .collect::<Result<Vec<_>>>()?;

        if !self.target.is_single_file() {
            let mut claimed: BTreeMap<&Path, &Path> = BTreeMap::new();
            for (source, destination) in &pairs {
                if let Some(previous) = claimed.insert(destination, source) {
                    return Err(Error::configuration(format!(
                        "'{}' and '{}' both compile to '{}'",
                        previous.display(),
                        source.display(),
                        destination.display()
                    )));
                }
            }
        }

        Ok(pairs)
    }
}

/// Trait for the style-sheet compiler - allows a fake engine in tests
pub trait CompilerEngine {
    /// Compile the requested files and write all outputs.
    ///
    /// Errors abort the build; no partial-output guarantee is made.
    fn compile(&self, request: CompilationRequest) -> Result<()>;
}

/// Runs the `recess` command line.
#[derive(Debug, Clone)]
pub struct RecessEngine {
    program: PathBuf,
    args: Vec<String>,
}

impl Default for RecessEngine {
    fn default() -> Self {
        Self::new(DEFAULT_ENGINE_PROGRAM)
    }
}

impl RecessEngine {
    /// Use `program` as the recess executable
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Leading arguments placed before the engine options, e.g. the script
    /// path when `program` is `node`
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    fn name(&self) -> String {
        self.program.display().to_string()
    }

    fn write_config(&self, request: &CompilationRequest) -> Result<PathBuf> {
        let config_path = request.staging_dir.join(ENGINE_CONFIG_FILENAME);
        let json = serde_json::to_vec_pretty(&request.config)?;
        fs::write(&config_path, json).map_err(|e| Error::Filesystem {
            message: format!(
                "Failed to write engine config '{}': {}",
                config_path.display(),
                e
            ),
        })?;
        Ok(config_path)
    }

    /// Run the engine over `files` and return its standard output
    fn run(&self, config_path: &Path, files: &[PathBuf]) -> Result<Vec<u8>> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg("--config")
            .arg(config_path)
            .args(files);
        debug!("Running {:?}", command);

        let output = command.output().map_err(|e| Error::Engine {
            engine: self.name(),
            message: format!(
                "failed to start: {} (is recess installed? try `npm install -g recess`)",
                e
            ),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let detail = if stderr.trim().is_empty() {
                stdout.trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(Error::Engine {
                engine: self.name(),
                message: format!("exited with {}: {}", output.status, detail),
            });
        }

        for line in String::from_utf8_lossy(&output.stderr).lines() {
            let line = line.trim();
            if !line.is_empty() {
                warn!("{}: {}", self.name(), line);
            }
        }

        Ok(output.stdout)
    }
}

impl CompilerEngine for RecessEngine {
    fn compile(&self, request: CompilationRequest) -> Result<()> {
        let config_path = self.write_config(&request)?;

        match &request.target {
            OutputTarget::SingleFile(output) => {
                let compiled = if request.files.is_empty() {
                    Vec::new()
                } else {
                    self.run(&config_path, request.files.as_slice())?
                };
                write_output(output, &compiled)?;
                info!(
                    "Compiled {} style-sheet(s) into {}",
                    request.files.len(),
                    output.display()
                );
            }
            OutputTarget::Directory(dir) => {
                for (source, destination) in request.destinations()? {
                    let compiled = self.run(&config_path, std::slice::from_ref(&source))?;
                    write_output(&destination, &compiled)?;
                    debug!("{} -> {}", source.display(), destination.display());
                }
                info!(
                    "Compiled {} style-sheet(s) into {}",
                    request.files.len(),
                    dir.display()
                );
            }
        }

        Ok(())
    }
}

fn write_output(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::Filesystem {
            message: format!("Failed to create directory '{}': {}", parent.display(), e),
        })?;
    }
    fs::write(path, content).map_err(|e| Error::Filesystem {
        message: format!("Failed to write file '{}': {}", path.display(), e),
    })
}
