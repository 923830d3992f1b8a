//! Load command implementation
//!
//! Runs the full action: resolve, validate, publish outputs and variables,
//! register secrets and write the step summary.

use crate::adapters::host::GitHubActionsHost;
use crate::cli::SourceArgs;
use crate::core::{run, ActionInputs};
use clap::Args;

/// Arguments for the load command
#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Environment section to load
    #[arg(short, long, env = "INPUT_ENVIRONMENT")]
    pub environment: Option<String>,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Comma-separated field names to always mask
    #[arg(long, env = "INPUT_MASK-FIELDS")]
    pub mask_fields: Option<String>,

    /// Comma-separated field names to never mask
    #[arg(long, env = "INPUT_SAFE-FIELDS")]
    pub safe_fields: Option<String>,

    /// Print the run summary as JSON on success
    #[arg(long)]
    pub json: bool,
}

impl LoadArgs {
    /// Converts the parsed arguments into action inputs
    pub fn inputs(&self) -> ActionInputs {
        ActionInputs {
            environment: self.environment.clone().unwrap_or_default(),
            config_file: self.source.config_file.clone().unwrap_or_default(),
            mask_fields: self.mask_fields.clone(),
            safe_fields: self.safe_fields.clone(),
            workspace: self.source.workspace.clone(),
        }
    }

    /// Execute the load command
    pub fn execute(&self) -> anyhow::Result<i32> {
        let inputs = self.inputs();
        let mut host = GitHubActionsHost::from_env();

        match run(&inputs, &mut host) {
            Ok(summary) => {
                if self.json {
                    println!("{}", serde_json::to_string_pretty(&summary)?);
                }
                Ok(0)
            }
            Err(e) => {
                tracing::debug!(category = e.category(), "Load failed");
                Ok(1)
            }
        }
    }
}
