//! Property-based tests for path manipulation functions.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::path::{glob_match, mirrored_destination, normalize_relative};
    use proptest::prelude::*;
    use std::path::{Path, PathBuf};

    /// A relative path of one to four plain segments
    fn relative_path() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z0-9_-]{1,8}", 1..5)
    }

    proptest! {
        /// Property: mirrored destinations always end in `.css`
        #[test]
        fn mirrored_destination_always_css(
            segments in relative_path(),
            ext in prop::sample::select(vec!["less", "css", "LESS"]),
        ) {
            let relative = format!("{}.{}", segments.join("/"), ext);
            let file = Path::new("/src").join(&relative);
            let dest = mirrored_destination(Path::new("/src"), Path::new("/out"), &file).unwrap();
            prop_assert_eq!(dest.extension().and_then(|e| e.to_str()), Some("css"));
        }

        /// Property: mirrored destinations stay under the output directory and
        /// keep the relative directory structure
        #[test]
        fn mirrored_destination_preserves_structure(segments in relative_path()) {
            let relative = format!("{}.less", segments.join("/"));
            let file = Path::new("/src").join(&relative);
            let dest = mirrored_destination(Path::new("/src"), Path::new("/out"), &file).unwrap();
            prop_assert!(dest.starts_with("/out"));

            let expected_parent = Path::new("/out").join(&relative);
            prop_assert_eq!(dest.parent(), expected_parent.parent());
        }

        /// Property: `**/*.less` matches any relative `.less` path
        #[test]
        fn recursive_pattern_matches_any_depth(segments in relative_path()) {
            let relative = format!("{}.less", segments.join("/"));
            prop_assert!(glob_match("**/*.less", &relative).unwrap());
        }

        /// Property: a single `*` never crosses a separator
        #[test]
        fn single_star_stays_in_segment(segments in prop::collection::vec("[a-z]{1,6}", 2..5)) {
            let relative = format!("{}.less", segments.join("/"));
            prop_assert!(!glob_match("*.less", &relative).unwrap());
        }

        /// Property: normalizing a joined path gives back the `/`-joined segments
        #[test]
        fn normalize_relative_round_trips(segments in relative_path()) {
            let path: PathBuf = segments.iter().collect();
            prop_assert_eq!(normalize_relative(&path), segments.join("/"));
        }
    }
}
