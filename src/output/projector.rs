//! Output Projector
//!
//! Publishes every resolved field under its hyphenated name, registers the
//! values the masking policy flags as secrets, and exports the well-known
//! identifiers as `AZURE_*` environment variables.

use super::summary::RunSummary;
use crate::adapters::host::ActionHost;
use crate::config::schema::EnvironmentConfig;
use crate::config::secret::{mask_value, MaskedSecret};
use crate::domain::fields::{env_var_name, to_external, WELL_KNOWN_FIELDS};
use crate::domain::Result;
use crate::log_mask_decision;
use crate::masking::{MaskRule, MaskingPolicy};

/// Value of a projected field
#[derive(Debug, Clone)]
pub enum FieldValue {
    Plain(String),
    Masked(MaskedSecret),
}

impl FieldValue {
    /// Whether the value was flagged by the masking policy
    pub fn is_masked(&self) -> bool {
        matches!(self, FieldValue::Masked(_))
    }

    /// Text safe to place in log lines; `***` for masked values
    pub fn display(&self) -> &str {
        match self {
            FieldValue::Plain(value) => value,
            FieldValue::Masked(_) => "***",
        }
    }
}

/// A field after projection
#[derive(Debug, Clone)]
pub struct ProjectedField {
    pub canonical_name: String,
    pub external_name: String,
    pub value: FieldValue,
    pub rule: MaskRule,
}

/// Everything a projection emitted
#[derive(Debug, Clone)]
pub struct Projection {
    /// Fields in document order
    pub fields: Vec<ProjectedField>,
    /// Environment variable names exported, in export order
    pub exported_variables: Vec<String>,
    pub summary: RunSummary,
}

impl Projection {
    /// Looks up a projected field by external name
    pub fn field(&self, external_name: &str) -> Option<&ProjectedField> {
        self.fields.iter().find(|f| f.external_name == external_name)
    }
}

/// Maps resolved fields onto the CI host
pub struct OutputProjector<'a> {
    policy: &'a MaskingPolicy,
}

impl<'a> OutputProjector<'a> {
    /// Creates a projector that masks according to `policy`
    pub fn new(policy: &'a MaskingPolicy) -> Self {
        Self { policy }
    }

    /// Emits outputs, secrets and environment variables for `config`
    ///
    /// # Errors
    ///
    /// Returns the first host error; emissions made before it are not undone.
    pub fn project<H: ActionHost + ?Sized>(
        &self,
        environment: &str,
        config: &EnvironmentConfig,
        host: &mut H,
    ) -> Result<Projection> {
        let mut summary = RunSummary::new(environment);
        let mut fields = Vec::with_capacity(config.len());

        for (canonical, value) in config.iter() {
            let external = to_external(canonical);
            let decision = self.policy.evaluate(&external);
            log_mask_decision!(external, decision);

            // Mask registration must precede any emission of the value.
            if decision.masked {
                host.set_secret(value)?;
            }
            host.set_output(&external, value)?;

            let field_value = if decision.masked {
                summary.record_masked(&external);
                FieldValue::Masked(mask_value(value))
            } else {
                summary.record_safe(canonical, &external, value);
                FieldValue::Plain(value.to_string())
            };
            host.debug(&format!("Set output {external}: {}", field_value.display()));

            fields.push(ProjectedField {
                canonical_name: canonical.to_string(),
                external_name: external,
                value: field_value,
                rule: decision.rule,
            });
        }

        let summary = summary.finish();
        if !summary.masked_fields.is_empty() {
            host.info(&format!(
                "Masked fields: {}",
                summary.masked_fields.join(", ")
            ));
        }
        if !summary.safe_fields.is_empty() {
            host.info(&format!("Safe fields: {}", summary.safe_fields.join(", ")));
        }

        let exported_variables = self.export_well_known(config, host)?;

        tracing::info!(
            environment = %environment,
            fields = summary.fields_processed,
            masked = summary.masked_count,
            safe = summary.safe_count,
            exported = exported_variables.len(),
            "Projected configuration"
        );

        Ok(Projection {
            fields,
            exported_variables,
            summary,
        })
    }

    fn export_well_known<H: ActionHost + ?Sized>(
        &self,
        config: &EnvironmentConfig,
        host: &mut H,
    ) -> Result<Vec<String>> {
        let mut exported = Vec::new();
        for field in WELL_KNOWN_FIELDS {
            let Some(value) = config.get_non_empty(field) else {
                continue;
            };
            if self.policy.should_mask(&to_external(field)) {
                host.set_secret(value)?;
            }
            let name = env_var_name(field);
            host.export_variable(&name, value)?;
            exported.push(name);
        }
        Ok(exported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::host::{GitHubActionsHost, HostFiles, RecordingHost};

    fn production() -> EnvironmentConfig {
        [
            ("client_id", "22222222-2222-2222-2222-222222222222"),
            ("tenant_id", "33333333-3333-3333-3333-333333333333"),
            ("subscription_id", "44444444-4444-4444-4444-444444444444"),
            ("resource_group", "prod-rg"),
            ("location", "eastus"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_outputs_in_document_order() {
        let policy = MaskingPolicy::builtin().unwrap();
        let mut host = RecordingHost::new();
        OutputProjector::new(&policy)
            .project("production", &production(), &mut host)
            .unwrap();

        let names: Vec<&str> = host.outputs.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec!["client-id", "tenant-id", "subscription-id", "resource-group", "location"]
        );
        assert!(host.secrets.is_empty());
    }

    #[test]
    fn test_masked_field_registered_and_hidden() {
        let policy = MaskingPolicy::builtin().unwrap();
        let mut host = RecordingHost::new();
        let mut config = production().iter().map(|(k, v)| (k.to_string(), v.to_string())).collect::<Vec<_>>();
        config.push(("api_key".to_string(), "secret-api-key".to_string()));
        let config: EnvironmentConfig = config.into_iter().collect();

        let projection = OutputProjector::new(&policy)
            .project("production", &config, &mut host)
            .unwrap();

        assert_eq!(host.output("api-key"), Some("secret-api-key"));
        assert!(host.is_secret("secret-api-key"));
        assert!(projection.field("api-key").unwrap().value.is_masked());
        assert!(host.debugs.contains(&"Set output api-key: ***".to_string()));
        assert!(host.infos.contains(&"Masked fields: api-key".to_string()));
        assert!(!format!("{projection:?}").contains("secret-api-key"));
        assert!(projection
            .summary
            .rows
            .iter()
            .all(|row| row.value != "secret-api-key"));
    }

    #[test]
    fn test_mask_issued_before_value_on_command_fallback() {
        let policy = MaskingPolicy::builtin().unwrap();
        let mut host = GitHubActionsHost::new(Vec::new(), HostFiles::default());
        let config: EnvironmentConfig = [
            ("app_name", "web"),
            ("api_key", "secret-api-key"),
        ]
        .into_iter()
        .collect();

        OutputProjector::new(&policy)
            .project("production", &config, &mut host)
            .unwrap();

        let stdout = String::from_utf8(host.into_inner()).unwrap();
        let mask_at = stdout.find("::add-mask::secret-api-key").unwrap();
        let first_value_at = stdout.find("secret-api-key").unwrap();
        assert_eq!(mask_at + "::add-mask::".len(), first_value_at);
        assert!(stdout.contains("::set-output name=api-key::secret-api-key"));
    }

    #[test]
    fn test_log_lines_sorted_and_omitted_when_empty() {
        let policy = MaskingPolicy::builtin().unwrap();
        let mut host = RecordingHost::new();
        let config: EnvironmentConfig = [("zone", "1"), ("app_name", "web")].into_iter().collect();

        OutputProjector::new(&policy)
            .project("dev", &config, &mut host)
            .unwrap();

        assert_eq!(host.infos, vec!["Safe fields: app-name, zone".to_string()]);
    }

    #[test]
    fn test_well_known_fields_exported() {
        let policy = MaskingPolicy::builtin().unwrap();
        let mut host = RecordingHost::new();
        let projection = OutputProjector::new(&policy)
            .project("production", &production(), &mut host)
            .unwrap();

        assert_eq!(
            projection.exported_variables,
            vec![
                "AZURE_CLIENT_ID",
                "AZURE_TENANT_ID",
                "AZURE_SUBSCRIPTION_ID",
                "AZURE_RESOURCE_GROUP",
                "AZURE_LOCATION",
            ]
        );
        assert_eq!(host.exported_variable("AZURE_LOCATION"), Some("eastus"));
    }

    #[test]
    fn test_optional_well_known_fields_skipped_when_empty() {
        let policy = MaskingPolicy::builtin().unwrap();
        let mut host = RecordingHost::new();
        let config: EnvironmentConfig = [
            ("client_id", "22222222-2222-2222-2222-222222222222"),
            ("tenant_id", "33333333-3333-3333-3333-333333333333"),
            ("subscription_id", "44444444-4444-4444-4444-444444444444"),
            ("location", ""),
        ]
        .into_iter()
        .collect();

        OutputProjector::new(&policy)
            .project("minimal", &config, &mut host)
            .unwrap();

        assert!(host.exported_variable("AZURE_RESOURCE_GROUP").is_none());
        assert!(host.exported_variable("AZURE_LOCATION").is_none());
        assert_eq!(host.output("location"), Some(""));
    }

    #[test]
    fn test_export_respects_never_mask_over_caller_additions() {
        let mut policy = MaskingPolicy::builtin().unwrap();
        policy.extend_always_mask("resource-group");
        let mut host = RecordingHost::new();
        OutputProjector::new(&policy)
            .project("production", &production(), &mut host)
            .unwrap();

        assert!(!host.is_secret("prod-rg"));
    }
}
