//! Action runner - orchestrates one loader run against a CI host

use crate::adapters::host::ActionHost;
use crate::config::loader::{ConfigResolver, DEFAULT_CONFIG_FILE};
use crate::domain::errors::LoaderError;
use crate::domain::Result;
use crate::log_error_with_context;
use crate::masking::MaskingPolicy;
use crate::output::{OutputProjector, RunSummary};
use std::path::PathBuf;

/// Invocation inputs for a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionInputs {
    /// Environment section to load (required)
    pub environment: String,

    /// Config file path relative to the workspace
    pub config_file: String,

    /// Comma-separated names added to the always-mask list
    pub mask_fields: Option<String>,

    /// Comma-separated names added to the never-mask list
    pub safe_fields: Option<String>,

    /// Workspace root; `GITHUB_WORKSPACE` or the current directory when unset
    pub workspace: Option<PathBuf>,
}

impl ActionInputs {
    /// Inputs for `environment` with the default config file
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            config_file: DEFAULT_CONFIG_FILE.to_string(),
            ..Self::default()
        }
    }

    pub fn with_config_file(mut self, config_file: impl Into<String>) -> Self {
        self.config_file = config_file.into();
        self
    }

    pub fn with_mask_fields(mut self, fields: impl Into<String>) -> Self {
        self.mask_fields = Some(fields.into());
        self
    }

    pub fn with_safe_fields(mut self, fields: impl Into<String>) -> Self {
        self.safe_fields = Some(fields.into());
        self
    }

    pub fn with_workspace(mut self, workspace: impl Into<PathBuf>) -> Self {
        self.workspace = Some(workspace.into());
        self
    }

    /// Config file to use; blank falls back to the default location
    pub fn config_file(&self) -> &str {
        match self.config_file.trim() {
            "" => DEFAULT_CONFIG_FILE,
            path => path,
        }
    }

    fn resolver(&self) -> ConfigResolver {
        ConfigResolver::from_inputs(Some(self.config_file()), self.workspace.as_deref())
    }
}

/// Runs the loader and reports a failure to the host
///
/// On error the host is marked failed with the error message, remediation
/// hints are written as error lines, and the error is returned.
pub fn run<H: ActionHost + ?Sized>(inputs: &ActionInputs, host: &mut H) -> Result<RunSummary> {
    execute(inputs, host).inspect_err(|err| report_failure(err, host))
}

/// Runs the loader without failure reporting
pub fn execute<H: ActionHost + ?Sized>(inputs: &ActionInputs, host: &mut H) -> Result<RunSummary> {
    let environment = inputs.environment.trim();
    if environment.is_empty() {
        return Err(LoaderError::Validation(
            "Input required and not supplied: environment".to_string(),
        ));
    }
    let config_file = inputs.config_file();

    host.info(&format!(
        "Loading Azure configuration for environment: {environment}"
    ));
    host.info(&format!("Configuration file: {config_file}"));
    tracing::info!(environment = %environment, config_file = %config_file, "Loading configuration");

    let mut resolver = inputs.resolver();
    let available = resolver.list_environments()?;
    host.debug(&format!("Available environments: {}", available.join(", ")));

    let config = resolver.get_environment(environment)?;
    ConfigResolver::validate(config)?;

    let policy = MaskingPolicy::from_inputs(
        inputs.mask_fields.as_deref(),
        inputs.safe_fields.as_deref(),
    )?;
    let projection = OutputProjector::new(&policy).project(environment, config, host)?;

    host.info(&format!(
        "✅ Successfully loaded configuration for {environment} environment"
    ));
    host.append_summary(&projection.summary.to_markdown())?;

    Ok(projection.summary)
}

/// Marks the host failed and writes remediation hints for `err`
pub fn report_failure<H: ActionHost + ?Sized>(err: &LoaderError, host: &mut H) {
    log_error_with_context!(err, err.category());
    host.set_failed(&err.to_string());
    for hint in err.remediation_hints() {
        host.error(hint);
    }
}
