//! # Build Settings
//!
//! This module defines [`BuildSettings`], the single explicit value that
//! configures one build step, and the logic for reading it from a
//! `recess.yaml` settings file.
//!
//! ## File Format
//!
//! All keys are optional and use the engine's camelCase names:
//!
//! ```yaml
//! sourceDirectory: src/main/less
//! includes: ["**/*.less"]
//! excludes: ["**/vendor/**"]
//! outputFile: target/site.css
//! compress: true
//! noIDs: false
//! ```
//!
//! Missing keys take the documented defaults. `outputDirectory` has a default,
//! so setting it to `~` is the way to clear it. Relative paths are resolved
//! against the project directory with [`BuildSettings::resolve_against`].

use crate::defaults::{
    default_excludes, default_includes, default_output_directory, default_source_directory,
    default_staging_directory,
};
use crate::error::{Error, Result};
use crate::lint::LintOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for one build step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSettings {
    /// Fileset patterns selecting sources, relative to the source directory.
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    /// Fileset patterns dropping sources; these win over includes.
    #[serde(default = "default_excludes")]
    pub excludes: Vec<String>,
    /// Root scanned for style-sheets.
    #[serde(default = "default_source_directory")]
    pub source_directory: PathBuf,
    /// Root for mirrored per-file output.
    #[serde(default = "default_output_directory")]
    pub output_directory: Option<PathBuf>,
    /// Combined output file; when set it takes precedence over
    /// `output_directory`.
    #[serde(default)]
    pub output_file: Option<PathBuf>,
    /// Working area for the engine's intermediate artifacts.
    #[serde(default = "default_staging_directory")]
    pub staging_directory: PathBuf,
    /// Lint/compile toggles.
    #[serde(flatten)]
    pub lint: LintOptions,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            includes: default_includes(),
            excludes: default_excludes(),
            source_directory: default_source_directory(),
            output_directory: default_output_directory(),
            output_file: None,
            staging_directory: default_staging_directory(),
            lint: LintOptions::default(),
        }
    }
}

impl BuildSettings {
    /// Make every relative path absolute under `base`.
    pub fn resolve_against(mut self, base: &Path) -> Self {
        let resolve = |p: PathBuf| if p.is_absolute() { p } else { base.join(p) };

        self.source_directory = resolve(self.source_directory);
        self.staging_directory = resolve(self.staging_directory);
        self.output_directory = self.output_directory.map(resolve);
        self.output_file = self.output_file.map(resolve);
        self
    }
}

/// Parses a YAML string into [`BuildSettings`].
///
/// An empty document yields the defaults.
pub fn parse(yaml_content: &str) -> Result<BuildSettings> {
    if yaml_content.trim().is_empty() {
        return Ok(BuildSettings::default());
    }

    serde_yaml::from_str(yaml_content).map_err(|e| Error::ConfigParse {
        message: e.to_string(),
        hint: Some(
            "Keys use camelCase names such as sourceDirectory, outputFile, noIDs".to_string(),
        ),
    })
}

/// Read and parse a settings file
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<BuildSettings> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| Error::ConfigParse {
        message: format!("Failed to read '{}': {}", path.display(), e),
        hint: None,
    })?;
    parse(&content)
}

/// Load settings from `path`.
///
/// A missing file yields the defaults unless `required` is set.
pub fn load(path: &Path, required: bool) -> Result<BuildSettings> {
    if !path.exists() {
        if required {
            return Err(Error::configuration(format!(
                "Settings file not found: {}",
                path.display()
            )));
        }
        log::debug!("No settings file at {}; using defaults", path.display());
        return Ok(BuildSettings::default());
    }
    from_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(parse("").unwrap(), BuildSettings::default());
        assert_eq!(parse("# nothing here\n").unwrap(), BuildSettings::default());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
sourceDirectory: web/less
includes: ["**/*.less"]
excludes: ["**/vendor/**"]
outputFile: dist/site.css
stagingDirectory: build/stage
compress: true
noIDs: false
"#;
        let settings = parse(yaml).unwrap();

        assert_eq!(settings.source_directory, PathBuf::from("web/less"));
        assert_eq!(settings.includes, vec!["**/*.less"]);
        assert_eq!(settings.excludes, vec!["**/vendor/**"]);
        assert_eq!(settings.output_file, Some(PathBuf::from("dist/site.css")));
        assert_eq!(settings.staging_directory, PathBuf::from("build/stage"));
        assert!(settings.lint.compress);
        assert!(!settings.lint.no_ids);
        // Untouched values keep their defaults
        assert_eq!(settings.output_directory, default_output_directory());
        assert!(settings.lint.zero_units);
    }

    #[test]
    fn test_parse_cleared_output_directory() {
        let settings = parse("outputDirectory: ~\n").unwrap();
        assert_eq!(settings.output_directory, None);
        assert_eq!(settings.output_file, None);
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = parse("includes: [unclosed").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_parse_wrong_type() {
        let err = parse("compress: maybe\n").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_resolve_against_base() {
        let settings = BuildSettings {
            output_file: Some(PathBuf::from("dist/site.css")),
            ..BuildSettings::default()
        }
        .resolve_against(Path::new("/project"));

        assert_eq!(
            settings.source_directory,
            PathBuf::from("/project/src/main/less")
        );
        assert_eq!(
            settings.output_directory,
            Some(PathBuf::from("/project/target/generated-sources/recess"))
        );
        assert_eq!(
            settings.output_file,
            Some(PathBuf::from("/project/dist/site.css"))
        );
        assert_eq!(
            settings.staging_directory,
            PathBuf::from("/project/target/recess")
        );
    }

    #[test]
    fn test_resolve_keeps_absolute_paths() {
        let settings = BuildSettings {
            source_directory: PathBuf::from("/abs/less"),
            ..BuildSettings::default()
        }
        .resolve_against(Path::new("/project"));
        assert_eq!(settings.source_directory, PathBuf::from("/abs/less"));
    }

    #[test]
    fn test_load_missing_optional_file() {
        let temp_dir = TempDir::new().unwrap();
        let settings = load(&temp_dir.path().join("recess.yaml"), false).unwrap();
        assert_eq!(settings, BuildSettings::default());
    }

    #[test]
    fn test_load_missing_required_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load(&temp_dir.path().join("recess.yaml"), true).unwrap_err();
        assert!(err.to_string().contains("Settings file not found"));
    }

    #[test]
    fn test_load_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("recess.yaml");
        fs::write(&path, "stripColors: true\n").unwrap();

        let settings = load(&path, true).unwrap();
        assert!(settings.lint.strip_colors);
    }
}
