//! In-memory host that records every call

use super::traits::ActionHost;
use crate::domain::Result;

/// Host implementation that keeps every emission for later inspection
#[derive(Debug, Default, Clone)]
pub struct RecordingHost {
    /// `(name, value)` pairs passed to `set_output`, in call order
    pub outputs: Vec<(String, String)>,
    /// Values passed to `set_secret`, in call order
    pub secrets: Vec<String>,
    /// `(name, value)` pairs passed to `export_variable`, in call order
    pub exported: Vec<(String, String)>,
    /// Informational log lines
    pub infos: Vec<String>,
    /// Debug log lines
    pub debugs: Vec<String>,
    /// Error annotations, including remediation hints
    pub errors: Vec<String>,
    /// Reason passed to `set_failed`, if any
    pub failure: Option<String>,
    /// Markdown passed to `append_summary`
    pub summaries: Vec<String>,
}

impl RecordingHost {
    /// Creates a host with no recorded calls
    pub fn new() -> Self {
        Self::default()
    }

    /// Value published for an output name
    pub fn output(&self, name: &str) -> Option<&str> {
        self.outputs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Value exported for an environment variable name
    pub fn exported_variable(&self, name: &str) -> Option<&str> {
        self.exported
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `value` was registered as a secret
    pub fn is_secret(&self, value: &str) -> bool {
        self.secrets.iter().any(|s| s == value)
    }

    /// Whether `set_failed` has been called
    pub fn has_failed(&self) -> bool {
        self.failure.is_some()
    }
}

impl ActionHost for RecordingHost {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        self.outputs.push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn set_secret(&mut self, value: &str) -> Result<()> {
        self.secrets.push(value.to_string());
        Ok(())
    }

    fn export_variable(&mut self, name: &str, value: &str) -> Result<()> {
        self.exported.push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn debug(&mut self, message: &str) {
        self.debugs.push(message.to_string());
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn set_failed(&mut self, message: &str) {
        self.failure = Some(message.to_string());
    }

    fn append_summary(&mut self, markdown: &str) -> Result<()> {
        self.summaries.push(markdown.to_string());
        Ok(())
    }
}
