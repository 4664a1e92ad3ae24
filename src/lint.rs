//! # Lint Configuration
//!
//! Assembles the flat option map handed to the style-sheet engine from the
//! ten declared lint/compile toggles.
//!
//! The result always carries `compile = true`: this step produces compiled
//! output, not only a violation report, and that marker is not something the
//! caller can switch off.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Option name of the fixed mode marker.
pub const COMPILE: &str = "compile";

/// Declared toggles, as set by the caller or taken from defaults.
///
/// Field names serialize to the engine's own option names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintOptions {
    /// Compress the compiled output.
    pub compress: bool,
    /// Don't complain about IDs in selectors.
    #[serde(rename = "noIDs")]
    pub no_ids: bool,
    /// Don't complain about styling `.js-` prefixed class names.
    #[serde(rename = "noJSPrefix")]
    pub no_js_prefix: bool,
    /// Don't complain about overqualified selectors (`div#foo.bar`).
    #[serde(rename = "noOverqualifying")]
    pub no_overqualifying: bool,
    /// Don't complain about underscores in class names.
    #[serde(rename = "noUnderscores")]
    pub no_underscores: bool,
    /// Don't complain about the universal `*` selector.
    #[serde(rename = "noUniversalSelectors")]
    pub no_universal_selectors: bool,
    /// Line up vendor-prefixed properties with whitespace.
    #[serde(rename = "prefixWhitespace")]
    pub prefix_whitespace: bool,
    /// Check property ordering.
    #[serde(rename = "strictPropertyOrder")]
    pub strict_property_order: bool,
    /// Remove colour codes from engine output.
    #[serde(rename = "stripColors")]
    pub strip_colors: bool,
    /// Don't complain about units on zero values.
    #[serde(rename = "zeroUnits")]
    pub zero_units: bool,
}

impl Default for LintOptions {
    fn default() -> Self {
        Self {
            compress: false,
            no_ids: true,
            no_js_prefix: true,
            no_overqualifying: true,
            no_underscores: true,
            no_universal_selectors: true,
            prefix_whitespace: true,
            strict_property_order: true,
            strip_colors: false,
            zero_units: true,
        }
    }
}

impl LintOptions {
    /// The toggles paired with their engine option names.
    pub fn entries(&self) -> [(&'static str, bool); 10] {
        [
            ("compress", self.compress),
            ("noIDs", self.no_ids),
            ("noJSPrefix", self.no_js_prefix),
            ("noOverqualifying", self.no_overqualifying),
            ("noUnderscores", self.no_underscores),
            ("noUniversalSelectors", self.no_universal_selectors),
            ("prefixWhitespace", self.prefix_whitespace),
            ("strictPropertyOrder", self.strict_property_order),
            ("stripColors", self.strip_colors),
            ("zeroUnits", self.zero_units),
        ]
    }
}

/// Immutable option map passed to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LintConfiguration {
    options: BTreeMap<&'static str, bool>,
}

impl LintConfiguration {
    /// Value of an option, if present
    pub fn get(&self, name: &str) -> Option<bool> {
        self.options.get(name).copied()
    }

    /// Options in name order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.options.iter().map(|(name, value)| (*name, *value))
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl From<&LintOptions> for LintConfiguration {
    fn from(options: &LintOptions) -> Self {
        assemble(options)
    }
}

/// Build the engine configuration from declared toggles.
///
/// Values are taken verbatim; `compile = true` is always added.
pub fn assemble(options: &LintOptions) -> LintConfiguration {
    let mut map: BTreeMap<&'static str, bool> = options.entries().into_iter().collect();
    map.insert(COMPILE, true);
    LintConfiguration { options: map }
}
