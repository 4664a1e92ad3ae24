//! # Source Enumeration
//!
//! Resolves include/exclude fileset patterns against a source root into the
//! concrete list of style-sheets handed to the engine.
//!
//! Patterns are matched against paths relative to the root with `/`
//! separators: `**` spans any depth and `*` stays within one segment. A file
//! matching both an include and an exclude pattern is excluded.
//!
//! The result is sorted by relative path so the order is the same on every
//! platform and filesystem; single-file output concatenates in this order.

use crate::error::{Error, Result};
use crate::filesystem::SourceTree;
use crate::path::{compile_pattern, normalize_relative, pattern_matches};
use glob::Pattern;
use log::debug;
use std::path::{Path, PathBuf};

/// Ordered absolute paths of the style-sheets taking part in a build.
///
/// May be empty; an empty set is still handed to the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFileSet {
    files: Vec<PathBuf>,
}

impl SourceFileSet {
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self { files }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.files.iter()
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.files
    }
}

impl IntoIterator for SourceFileSet {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}

impl<'a> IntoIterator for &'a SourceFileSet {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// Resolve the source root to an absolute path.
pub fn resolve_root(source_root: &Path) -> Result<PathBuf> {
    std::path::absolute(source_root).map_err(|e| Error::Path {
        message: format!(
            "Failed to resolve source directory '{}': {}",
            source_root.display(),
            e
        ),
    })
}

/// Verify the source root is an existing directory.
pub fn ensure_source_root(tree: &dyn SourceTree, source_root: &Path) -> Result<()> {
    if tree.is_dir(source_root)? {
        return Ok(());
    }
    Err(Error::Configuration {
        message: format!(
            "Source directory does not exist or is not a directory: {}",
            source_root.display()
        ),
        hint: Some("Set sourceDirectory or pass --source-directory".to_string()),
    })
}

/// Enumerate the style-sheets under `source_root`.
///
/// Fails with a configuration error before scanning if the root is not a
/// directory. Returned paths are absolute.
pub fn enumerate(
    tree: &dyn SourceTree,
    source_root: &Path,
    includes: &[String],
    excludes: &[String],
) -> Result<SourceFileSet> {
    let root = resolve_root(source_root)?;
    ensure_source_root(tree, &root)?;

    let includes = compile_all(includes)?;
    let excludes = compile_all(excludes)?;

    let mut selected: Vec<(String, PathBuf)> = tree
        .walk_files(&root)?
        .into_iter()
        .filter_map(|relative| {
            let key = normalize_relative(&relative);
            let included = includes.iter().any(|p| pattern_matches(p, &key));
            let excluded = excludes.iter().any(|p| pattern_matches(p, &key));
            (included && !excluded).then_some((key, relative))
        })
        .collect();
    selected.sort_by(|a, b| a.0.cmp(&b.0));

    debug!(
        "Matched {} style-sheet(s) under {}",
        selected.len(),
        root.display()
    );

    Ok(SourceFileSet::new(
        selected
            .into_iter()
            .map(|(_, relative)| root.join(relative))
            .collect(),
    ))
}

fn compile_all(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns.iter().map(|p| compile_pattern(p)).collect()
}
