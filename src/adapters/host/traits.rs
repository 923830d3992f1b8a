//! CI host abstraction
//!
//! The loader talks to the CI system only through [`ActionHost`]: publishing
//! outputs and environment variables, registering secrets for redaction,
//! writing log lines and the step summary.

use crate::domain::Result;

/// Interface to the CI host running the step
///
/// Each call is a single side-effecting emission; implementations must not
/// buffer or retry.
pub trait ActionHost {
    /// Publishes a step output
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn set_output(&mut self, name: &str, value: &str) -> Result<()>;

    /// Registers a value for redaction in all later log output
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot be instructed.
    fn set_secret(&mut self, value: &str) -> Result<()>;

    /// Exports an environment variable for this and later steps
    ///
    /// # Errors
    ///
    /// Returns an error if the variable cannot be written.
    fn export_variable(&mut self, name: &str, value: &str) -> Result<()>;

    /// Writes an informational log line
    fn info(&mut self, message: &str);

    /// Writes a debug log line
    fn debug(&mut self, message: &str);

    /// Writes an error annotation
    fn error(&mut self, message: &str);

    /// Marks the step as failed with `message` as the reason
    fn set_failed(&mut self, message: &str);

    /// Appends markdown to the step summary
    ///
    /// # Errors
    ///
    /// Returns an error if the summary cannot be written.
    fn append_summary(&mut self, markdown: &str) -> Result<()>;
}
