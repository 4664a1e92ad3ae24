//! Shared test utilities for integration and E2E tests.
//!
//! Add `mod common;` to a test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! let fixture = TestFixture::new().with_file("src/main/less/main.less", "a { }");
//! fixture.command().arg("ls").assert().success();
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    pub use super::TestFixture;
}

/// Common `recess.yaml` snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Compile everything into one file.
    pub const SINGLE_FILE: &str = "outputFile: dist/site.css\n";

    /// Mirror sources under `dist`, skipping vendored style-sheets.
    pub const MIRRORED_WITHOUT_VENDOR: &str = r#"
outputDirectory: dist
excludes: ["**/vendor/**"]
"#;

    /// No output destination at all.
    pub const NO_OUTPUT: &str = "outputDirectory: ~\n";

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "includes: [unclosed";
}

/// Script standing in for recess: drops `--config <file>` and prints the
/// sources, so compiled output equals the concatenated input.
pub const FAKE_ENGINE: &str = "shift 2\ncat \"$@\"\n";

/// Script standing in for a recess run that rejects its input.
#[allow(dead_code)]
pub const FAILING_ENGINE: &str = "echo 'Parse error: unrecognised input' >&2\nexit 1\n";

/// A temporary project directory with optional settings and sources.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `recess.yaml` settings file with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.with_file("recess.yaml", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Add a style-sheet under the conventional source directory.
    pub fn with_source(self, path: &str, content: &str) -> Self {
        self.with_file(&format!("src/main/less/{}", path), content)
    }

    /// Install the fake engine script.
    pub fn with_fake_engine(self) -> Self {
        self.with_file("fake-recess.sh", FAKE_ENGINE)
    }

    /// Install the failing engine script.
    pub fn with_failing_engine(self) -> Self {
        self.with_file("failing-recess.sh", FAILING_ENGINE)
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Absolute path of a file inside the fixture.
    pub fn join(&self, path: &str) -> PathBuf {
        self.temp_dir.path().join(path)
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("recess-build");
        cmd.current_dir(self.path());
        for (key, _) in std::env::vars() {
            if key.starts_with("RECESS_") {
                cmd.env_remove(key);
            }
        }
        cmd
    }

    /// A `compile` command wired to the given engine script.
    pub fn compile_with(&self, script: &str) -> assert_cmd::Command {
        let mut cmd = self.command();
        cmd.arg("compile")
            .arg("--engine")
            .arg("sh")
            .arg("--engine-arg")
            .arg(self.join(script));
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
