//! Path manipulation utilities for recess-build

use crate::error::{Error, Result};
use glob::{MatchOptions, Pattern};
use std::path::{Component, Path, PathBuf};

/// Extension given to every compiled file in mirrored output.
pub const CSS_EXTENSION: &str = "css";

/// `*` stays within one path segment, `**` spans any depth.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Render a relative path with `/` separators so patterns behave the same on
/// every platform.
pub fn normalize_relative(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Compile a fileset pattern.
///
/// A trailing `/` selects everything below the directory, so `vendor/` is
/// the same as `vendor/**`.
pub fn compile_pattern(pattern: &str) -> Result<Pattern> {
    let pattern = pattern.replace('\\', "/");
    let pattern = if pattern.ends_with('/') {
        format!("{}**", pattern)
    } else {
        pattern
    };
    Pattern::new(&pattern).map_err(Error::Glob)
}

/// Match a `/`-separated relative path against a compiled pattern
pub fn pattern_matches(pattern: &Pattern, path: &str) -> bool {
    pattern.matches_with(path, MATCH_OPTIONS)
}

/// Match a path against a glob pattern
#[cfg(test)]
pub fn glob_match(pattern: &str, path: &str) -> Result<bool> {
    let pattern = compile_pattern(pattern)?;
    Ok(pattern_matches(&pattern, path))
}

/// Compute where a source file lands in mirrored output.
///
/// The path of `file` relative to `source_root` is re-rooted under
/// `output_dir` and its extension replaced by `.css`, whatever it was.
/// A dotfile such as `.less` has no extension, so it becomes `.less.css`.
pub fn mirrored_destination(source_root: &Path, output_dir: &Path, file: &Path) -> Result<PathBuf> {
    let relative = file.strip_prefix(source_root).map_err(|_| Error::Path {
        message: format!(
            "'{}' is not under source directory '{}'",
            file.display(),
            source_root.display()
        ),
    })?;

    let mut destination = output_dir.join(relative);
    destination.set_extension(CSS_EXTENSION);
    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glob_match() {
        assert!(glob_match("*.less", "main.less").unwrap());
        assert!(glob_match("**/*.less", "main.less").unwrap());
        assert!(glob_match("**/*.less", "styles/deep/main.less").unwrap());
        assert!(!glob_match("*.less", "styles/main.less").unwrap());
        assert!(!glob_match("**/*.less", "styles/main.css").unwrap());
    }

    #[test]
    fn test_glob_match_directory_patterns() {
        assert!(glob_match("vendor/**", "vendor/reset.less").unwrap());
        assert!(glob_match("vendor/**", "vendor/a/b.less").unwrap());
        assert!(!glob_match("vendor/**", "styles/vendor/reset.less").unwrap());
        assert!(glob_match("**/vendor/**", "styles/vendor/reset.less").unwrap());
        assert!(glob_match("vendor/", "vendor/reset.less").unwrap());
    }

    #[test]
    fn test_glob_match_invalid_pattern() {
        assert!(glob_match("[", "a.less").is_err());
    }

    #[test]
    fn test_normalize_relative() {
        let path = Path::new("styles").join("vendor").join("reset.less");
        assert_eq!(normalize_relative(&path), "styles/vendor/reset.less");
        assert_eq!(normalize_relative(Path::new("./a.less")), "a.less");
    }

    #[test]
    fn test_mirrored_destination_replaces_extension() {
        let dest =
            mirrored_destination(Path::new("/src"), Path::new("out"), Path::new("/src/a/b.less"))
                .unwrap();
        assert_eq!(dest, PathBuf::from("out/a/b.css"));

        let dest =
            mirrored_destination(Path::new("/src"), Path::new("out"), Path::new("/src/site.css"))
                .unwrap();
        assert_eq!(dest, PathBuf::from("out/site.css"));
    }

    #[test]
    fn test_mirrored_destination_keeps_inner_dots() {
        let dest = mirrored_destination(
            Path::new("/src"),
            Path::new("/dist"),
            Path::new("/src/theme.dark.less"),
        )
        .unwrap();
        assert_eq!(dest, PathBuf::from("/dist/theme.dark.css"));
    }

    #[test]
    fn test_mirrored_destination_dotfile_keeps_name() {
        let dest =
            mirrored_destination(Path::new("/src"), Path::new("/dist"), Path::new("/src/a/.less"))
                .unwrap();
        assert_eq!(dest, PathBuf::from("/dist/a/.less.css"));
    }

    #[test]
    fn test_mirrored_destination_outside_root() {
        let result =
            mirrored_destination(Path::new("/src"), Path::new("out"), Path::new("/other/a.less"));
        assert!(matches!(result, Err(Error::Path { .. })));
    }
}
