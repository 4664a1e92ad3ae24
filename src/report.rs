//! # Terminal Reporting
//!
//! Controls how the CLI prints its status lines: whether colours and emoji
//! are used and whether anything is printed at all.
//!
//! Colour follows the `--color=always|never|auto` flag. In `auto` mode it is
//! disabled by `NO_COLOR` (any value), `CLICOLOR=0`, `TERM=dumb` or a
//! non-TTY stdout, and forced by `CLICOLOR_FORCE=1`.

use console::style;
use std::env;

/// Status printer for CLI commands.
#[derive(Debug, Clone)]
pub struct Reporter {
    /// Whether colours and emojis should be used in output.
    pub use_color: bool,
    /// Print nothing but errors.
    pub quiet: bool,
}

impl Reporter {
    /// Create a reporter from environment and the `--color` flag.
    pub fn from_env_and_flag(color_flag: &str, quiet: bool) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => detect_color_support(),
        };

        Self { use_color, quiet }
    }

    /// Emoji when colours are on, the plain marker otherwise
    pub fn marker<'a>(&self, emoji: &'a str, plain: &'a str) -> &'a str {
        if self.use_color {
            emoji
        } else {
            plain
        }
    }

    /// Format a success line
    pub fn success_line(&self, message: &str) -> String {
        let marker = self.marker("✅", "[OK]");
        if self.use_color {
            format!("{} {}", marker, style(message).green())
        } else {
            format!("{} {}", marker, message)
        }
    }

    /// Format a failure line
    pub fn failure_line(&self, message: &str) -> String {
        let marker = self.marker("❌", "[FAIL]");
        if self.use_color {
            format!("{} {}", marker, style(message).red().bold())
        } else {
            format!("{} {}", marker, message)
        }
    }

    /// Print an informational line unless quiet
    pub fn step(&self, emoji: &str, plain: &str, message: &str) {
        if !self.quiet {
            println!("{} {}", self.marker(emoji, plain), message);
        }
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{}", self.success_line(message));
        }
    }

    /// Failures go to stderr even when quiet
    pub fn failure(&self, message: &str) {
        eprintln!("{}", self.failure_line(message));
    }
}

/// Detect whether color output is supported based on environment.
fn detect_color_support() -> bool {
    // The presence of NO_COLOR (even if empty) disables colors
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
        return false;
    }

    if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
        return true;
    }

    if env::var("TERM").is_ok_and(|v| v == "dumb") {
        return false;
    }

    console::Term::stdout().features().colors_supported()
}
