//! Built-in field name patterns

use crate::domain::errors::LoaderError;
use crate::domain::result::Result;
use regex::Regex;

/// Field names always treated as secrets
pub const DEFAULT_ALWAYS_MASK: &[&str] = &[
    "client-secret",
    "api-key",
    "access-key",
    "secret-key",
    "password",
    "token",
    "connection-string",
    "sas-token",
];

/// Field names never treated as secrets
pub const DEFAULT_NEVER_MASK: &[&str] = &[
    "subscription-id",
    "tenant-id",
    "client-id",
    "resource-group",
    "location",
    "region",
    "environment",
];

/// Patterns that mark a field as sensitive, as `(label, regex)`
pub const DEFAULT_MASK_PATTERNS: &[(&str, &str)] = &[
    ("contains-secret", r"(?i)secret"),
    ("contains-password", r"(?i)password"),
    ("contains-token", r"(?i)token"),
    ("contains-connection", r"(?i)connection"),
    ("contains-credential", r"(?i)credential"),
    ("ends-with-key", r"(?i)key$"),
];

/// Patterns that mark a field as safe to show, as `(label, regex)`
pub const DEFAULT_SAFE_PATTERNS: &[(&str, &str)] = &[
    ("ends-with-id", r"(?i)-id$"),
    ("ends-with-name", r"(?i)-name$"),
    ("ends-with-url", r"(?i)-url$"),
    ("is-location", r"(?i)^location$"),
    ("is-region", r"(?i)^region$"),
    ("is-environment", r"(?i)^environment$"),
];

/// Compiled pattern with its label
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Short label used in logs
    pub label: String,
    /// Compiled regex
    pub regex: Regex,
}

impl CompiledPattern {
    /// Whether the pattern matches anywhere in `field_name`
    pub fn is_match(&self, field_name: &str) -> bool {
        self.regex.is_match(field_name)
    }
}

/// Compiles a list of `(label, regex)` definitions
pub fn compile_patterns(definitions: &[(&str, &str)]) -> Result<Vec<CompiledPattern>> {
    definitions
        .iter()
        .map(|(label, pattern)| {
            let regex = Regex::new(pattern).map_err(|e| {
                LoaderError::Unexpected(format!("Invalid masking pattern '{label}': {e}"))
            })?;
            Ok(CompiledPattern {
                label: (*label).to_string(),
                regex,
            })
        })
        .collect()
}
