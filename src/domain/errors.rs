//! Domain error types
//!
//! Every failure in a run is raised at its origin as a [`LoaderError`] and
//! propagates unmodified to the action runner, which turns it into a single
//! terminal failure message.

use std::path::PathBuf;
use thiserror::Error;

/// Guidance printed when the configuration file cannot be found.
pub const NOT_FOUND_HINTS: &[&str] = &[
    "Make sure the configuration file exists and the path is correct.",
    "The path should be relative to your repository root.",
];

/// Guidance printed when the requested environment is not in the document.
pub const ENVIRONMENT_NOT_FOUND_HINTS: &[&str] =
    &["Check that the environment name matches one defined in your configuration file."];

/// Main loader error type
#[derive(Debug, Error)]
pub enum LoaderError {
    /// Configuration file absent at the resolved path
    #[error("Configuration file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// File content is not valid YAML
    #[error("Failed to parse configuration file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// Parsed content does not have the expected shape
    #[error("Invalid configuration file format: {0}")]
    Schema(String),

    /// Requested environment is absent from the document
    #[error(
        "Environment '{name}' not found in configuration. Available environments: {}",
        .available.join(", ")
    )]
    EnvironmentNotFound { name: String, available: Vec<String> },

    /// Required field missing or identifier malformed
    #[error("{0}")]
    Validation(String),

    /// Anything not covered by the categories above
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl LoaderError {
    /// Remediation lines to surface alongside the failure message
    pub fn remediation_hints(&self) -> &'static [&'static str] {
        match self {
            LoaderError::NotFound { .. } => NOT_FOUND_HINTS,
            LoaderError::EnvironmentNotFound { .. } => ENVIRONMENT_NOT_FOUND_HINTS,
            _ => &[],
        }
    }

    /// Short category name used in structured logs
    pub fn category(&self) -> &'static str {
        match self {
            LoaderError::NotFound { .. } => "not_found",
            LoaderError::Parse { .. } => "parse",
            LoaderError::Schema(_) => "schema",
            LoaderError::EnvironmentNotFound { .. } => "environment_not_found",
            LoaderError::Validation(_) => "validation",
            LoaderError::Unexpected(_) => "unexpected",
        }
    }
}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::Unexpected(err.to_string())
    }
}
