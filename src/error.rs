//! # Error Handling
//!
//! This module defines the centralized error type for `recess-build`. It uses
//! the `thiserror` library to describe every failure mode of a build step with
//! a clear message.
//!
//! Errors fall into three classes:
//!
//! - **Configuration errors** are raised before any compilation work starts:
//!   a missing or invalid source directory, no output destination, an
//!   unreadable settings file or a malformed glob pattern.
//! - **Engine errors** are raised by the external style-sheet compiler and
//!   propagate unmodified.
//! - **Filesystem errors** come from directory creation or traversal and are
//!   never retried.
//!
//! Every error aborts the whole build step; nothing is downgraded to a warning.

use thiserror::Error;

/// Main error type for recess-build operations
#[derive(Error, Debug)]
pub enum Error {
    /// The build settings are invalid, e.g. the source directory does not
    /// exist or no output destination was configured.
    #[error("Configuration error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Configuration {
        message: String,
        /// Optional hint for how to fix the settings
        hint: Option<String>,
    },

    /// The settings file could not be parsed.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the settings file
        hint: Option<String>,
    },

    /// The compiler engine failed while compiling style-sheets.
    #[error("Engine error ({engine}): {message}")]
    Engine { engine: String, message: String },

    /// A directory could not be created or traversed.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// An error occurred with a path-related operation.
    #[error("Path operation error: {message}")]
    Path { message: String },

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),

    /// An error indicating that a mutex or other lock has been poisoned.
    #[error("Lock poisoned: {context}")]
    LockPoisoned { context: String },
}

impl Error {
    /// Build a `Configuration` error without a hint.
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
            hint: None,
        }
    }

    /// Whether this error belongs to the configuration class, i.e. it was
    /// raised before any compilation work started.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::Configuration { .. } | Error::ConfigParse { .. } | Error::Glob(_)
        )
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
