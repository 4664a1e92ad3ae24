//! # recess-build
//!
//! This library provides the build-time step that lints and compiles LESS/CSS
//! style-sheets through the `recess` engine. It is used by the `recess-build`
//! command-line tool but can be embedded in any build driver.
//!
//! ## Quick Example
//!
//! ```
//! use recess_build::config::BuildSettings;
//! use recess_build::filesystem::MemoryFS;
//! use recess_build::orchestrator;
//! use std::path::PathBuf;
//!
//! let mut fs = MemoryFS::new();
//! fs.add_file("/site/less/main.less");
//! fs.add_file("/site/less/vendor/reset.less");
//!
//! let settings = BuildSettings {
//!     source_directory: PathBuf::from("/site/less"),
//!     excludes: vec!["vendor/**".to_string()],
//!     output_directory: Some(PathBuf::from("/site/dist")),
//!     ..BuildSettings::default()
//! };
//!
//! let request = orchestrator::plan(&settings, &fs).unwrap();
//! assert_eq!(request.files().len(), 1);
//! assert_eq!(
//!     request.destinations().unwrap()[0].1,
//!     PathBuf::from("/site/dist/main.css")
//! );
//! ```
//!
//! ## Core Concepts
//!
//! - **Settings (`config`)**: The single explicit value configuring a build,
//!   read from `recess.yaml` and overridden by CLI flags.
//! - **Source tree (`filesystem`)**: Directory scanning behind a trait, with a
//!   disk implementation and an in-memory one for tests.
//! - **Enumeration (`sources`)**: Include/exclude fileset patterns resolved
//!   into an ordered list of absolute style-sheet paths.
//! - **Lint configuration (`lint`)**: The ten engine toggles plus the fixed
//!   `compile` marker.
//! - **Output target (`target`)**: Single combined file or mirrored
//!   directory, exactly one of the two.
//! - **Engine (`engine`)**: The opaque compiler behind one `compile` call.
//!
//! ## Execution Flow
//!
//! [`orchestrator::execute`] validates the source directory, enumerates the
//! sources, creates the staging directory, assembles the configuration,
//! resolves the output target and invokes the engine exactly once.

pub mod config;
pub mod defaults;
pub mod engine;
pub mod error;
pub mod filesystem;
pub mod lint;
pub mod orchestrator;
pub mod path;
pub mod report;
pub mod sources;
pub mod target;

#[cfg(test)]
mod path_proptest;
