//! Run summary
//!
//! Tracks what the projector emitted and renders the human-readable step
//! summary. Masked values never enter this structure.

use crate::domain::fields::humanize;
use serde::Serialize;

/// Heading of the markdown step summary
pub const SUMMARY_HEADING: &str = "Azure Configuration Loaded";

const TRUNCATE_CHARS: usize = 8;
const ELLIPSIS: &str = "...";

/// One displayed row of the summary table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    /// Humanized field label, e.g. "Client id"
    pub label: String,
    /// Display value; identifiers are truncated
    pub value: String,
}

/// Summary of a projection run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Environment the fields were resolved from
    pub environment: String,

    /// Number of fields emitted as outputs
    pub fields_processed: usize,

    /// Number of fields registered as secrets
    pub masked_count: usize,

    /// Number of fields left visible
    pub safe_count: usize,

    /// External names of masked fields, sorted
    pub masked_fields: Vec<String>,

    /// External names of safe fields, sorted
    pub safe_fields: Vec<String>,

    /// Display rows for safe fields, in document order
    pub rows: Vec<SummaryRow>,
}

impl RunSummary {
    /// Creates an empty summary for an environment
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            ..Self::default()
        }
    }

    /// Records a field whose value was masked
    pub fn record_masked(&mut self, external_name: &str) {
        self.fields_processed += 1;
        self.masked_count += 1;
        self.masked_fields.push(external_name.to_string());
    }

    /// Records a visible field and adds its display row
    pub fn record_safe(&mut self, canonical_name: &str, external_name: &str, value: &str) {
        self.fields_processed += 1;
        self.safe_count += 1;
        self.safe_fields.push(external_name.to_string());
        self.rows.push(SummaryRow {
            label: humanize(external_name),
            value: display_value(canonical_name, value),
        });
    }

    /// Sorts the field name lists; rows keep document order
    pub fn finish(mut self) -> Self {
        self.masked_fields.sort();
        self.safe_fields.sort();
        self
    }

    /// Renders the summary as a markdown section
    pub fn to_markdown(&self) -> String {
        let mut md = format!("## {SUMMARY_HEADING}\n\n");
        md.push_str("| Field | Value |\n");
        md.push_str("| --- | --- |\n");
        md.push_str(&format!(
            "| Environment | {} |\n",
            escape_cell(&self.environment)
        ));
        for row in &self.rows {
            md.push_str(&format!(
                "| {} | {} |\n",
                escape_cell(&row.label),
                escape_cell(&row.value)
            ));
        }
        md.push_str(&format!(
            "\n{} fields processed, {} masked, {} safe\n",
            self.fields_processed, self.masked_count, self.safe_count
        ));
        md
    }
}

/// Display form of a field value
///
/// Values of fields whose underlying name contains "id" are cut to their first
/// eight characters followed by an ellipsis.
///
/// ```
/// use azure_config_loader::output::summary::display_value;
///
/// assert_eq!(display_value("client_id", "22222222-2222-2222-2222-222222222222"), "22222222...");
/// assert_eq!(display_value("location", "eastus"), "eastus");
/// ```
pub fn display_value(canonical_name: &str, value: &str) -> String {
    if canonical_name.contains("id") {
        let prefix: String = value.chars().take(TRUNCATE_CHARS).collect();
        format!("{prefix}{ELLIPSIS}")
    } else {
        value.to_string()
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
