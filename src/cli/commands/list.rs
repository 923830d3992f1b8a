//! List environments command implementation

use crate::cli::SourceArgs;
use clap::Args;

/// Arguments for the list-environments command
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

impl ListArgs {
    /// Execute the list-environments command
    pub fn execute(&self) -> anyhow::Result<i32> {
        let mut resolver = self.source.resolver();
        match resolver.list_environments() {
            Ok(names) => {
                tracing::debug!(count = names.len(), "Listing environments");
                for name in names {
                    println!("{name}");
                }
                Ok(0)
            }
            Err(e) => {
                eprintln!("❌ {e}");
                for hint in e.remediation_hints() {
                    eprintln!("   {hint}");
                }
                Ok(2)
            }
        }
    }
}
