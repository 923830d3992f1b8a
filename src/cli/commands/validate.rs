//! Validate command implementation
//!
//! Checks that an environment exists and carries well-formed identifiers,
//! without publishing anything to the CI host.

use crate::cli::SourceArgs;
use crate::config::ConfigResolver;
use crate::domain::fields::to_external;
use crate::masking::MaskingPolicy;
use clap::Args;

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Environment section to validate
    #[arg(env = "INPUT_ENVIRONMENT")]
    pub environment: String,

    #[command(flatten)]
    pub source: SourceArgs,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> anyhow::Result<i32> {
        let mut resolver = self.source.resolver();
        let path = resolver.resolved_path();
        tracing::info!(path = %path.display(), environment = %self.environment, "Validating configuration");

        println!("🔍 Validating configuration file: {}", path.display());
        println!();

        let config = match resolver.get_environment(&self.environment) {
            Ok(c) => {
                println!("✅ Environment '{}' found", self.environment);
                c
            }
            Err(e) => {
                println!("❌ Failed to load environment");
                println!("   Error: {e}");
                for hint in e.remediation_hints() {
                    println!("   {hint}");
                }
                return Ok(2);
            }
        };

        match ConfigResolver::validate(config) {
            Ok(()) => {
                let policy = MaskingPolicy::builtin()?;
                println!("✅ Required identifiers are valid");
                println!();
                println!("Fields:");
                for name in config.field_names() {
                    let external = to_external(name);
                    let decision = policy.evaluate(&external);
                    let status = if decision.masked { "masked" } else { "visible" };
                    println!("  {external}: {status} ({})", decision.rule);
                }
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2)
            }
        }
    }
}
