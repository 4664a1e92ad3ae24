//! Directory scanning behind a pluggable trait
//!
//! The orchestrator never touches the host filesystem directly. It asks a
//! [`SourceTree`] whether the source root is a directory, which files live
//! below it, and to create the staging directory. [`DiskFS`] is the real
//! implementation; [`MemoryFS`] is a synthetic tree for tests.

use crate::error::{Error, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Trait for directory operations - allows substituting a synthetic tree in tests
pub trait SourceTree: Send + Sync {
    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> Result<bool>;

    /// Every regular file below `root`, as paths relative to `root`.
    ///
    /// Order is whatever the traversal yields.
    fn walk_files(&self, root: &Path) -> Result<Vec<PathBuf>>;

    /// Create `path` and any missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<()>;
}

/// The host filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFS;

impl SourceTree for DiskFS {
    fn is_dir(&self, path: &Path) -> Result<bool> {
        Ok(path.is_dir())
    }

    fn walk_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in walkdir::WalkDir::new(root).follow_links(true) {
            let entry = entry.map_err(|e| Error::Filesystem {
                message: format!("Failed to scan '{}': {}", root.display(), e),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry.path().strip_prefix(root).map_err(|_| Error::Path {
                message: format!("Failed to make path relative: {}", entry.path().display()),
            })?;
            files.push(relative.to_path_buf());
        }

        Ok(files)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|e| Error::Filesystem {
            message: format!("Failed to create directory '{}': {}", path.display(), e),
        })
    }
}

/// In-memory tree of style-sheets, keyed by absolute path
#[derive(Debug, Default)]
pub struct MemoryFS {
    files: BTreeSet<PathBuf>,
    /// Directories created through [`SourceTree::create_dir_all`]
    created_dirs: Mutex<BTreeSet<PathBuf>>,
}

impl MemoryFS {
    /// Create a new empty filesystem
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file; its parents become directories implicitly
    pub fn add_file<P: AsRef<Path>>(&mut self, path: P) {
        self.files.insert(path.as_ref().to_path_buf());
    }

    /// Directories created so far, in path order
    pub fn created_dirs(&self) -> Result<Vec<PathBuf>> {
        Ok(self.lock_created_dirs()?.iter().cloned().collect())
    }

    fn lock_created_dirs(&self) -> Result<MutexGuard<'_, BTreeSet<PathBuf>>> {
        self.created_dirs.lock().map_err(|_| Error::LockPoisoned {
            context: "MemoryFS created directories".to_string(),
        })
    }
}

impl SourceTree for MemoryFS {
    fn is_dir(&self, path: &Path) -> Result<bool> {
        if self.files.iter().any(|f| f != path && f.starts_with(path)) {
            return Ok(true);
        }
        Ok(self.lock_created_dirs()?.contains(path))
    }

    fn walk_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Ok(self
            .files
            .iter()
            .filter_map(|path| path.strip_prefix(root).ok())
            .filter(|relative| !relative.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .collect())
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        if let Some(blocking) = path.ancestors().find(|p| self.files.contains(*p)) {
            return Err(Error::Filesystem {
                message: format!(
                    "Failed to create directory '{}': '{}' is a file",
                    path.display(),
                    blocking.display()
                ),
            });
        }

        let mut dirs = self.lock_created_dirs()?;
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }
}
