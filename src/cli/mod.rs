//! CLI interface and argument parsing
//!
//! Every action input can be passed as a flag or through the variable the
//! GitHub Actions runner sets for it (`INPUT_ENVIRONMENT`,
//! `INPUT_CONFIG-FILE`, `INPUT_MASK-FIELDS`, `INPUT_SAFE-FIELDS`).

pub mod commands;

use crate::config::ConfigResolver;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Azure Config Loader - publish environment-scoped Azure settings to CI
#[derive(Parser, Debug)]
#[command(name = "azure-config-loader")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, env = "LOADER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory for JSON log files
    #[arg(long, global = true, env = "LOADER_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load an environment and publish outputs, secrets and variables
    Load(commands::load::LoadArgs),

    /// Validate an environment without publishing anything
    Validate(commands::validate::ValidateArgs),

    /// List the environments defined in the configuration file
    ListEnvironments(commands::list::ListArgs),
}

/// Location of the environments file
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Path to the environments file, relative to the workspace
    #[arg(short, long, env = "INPUT_CONFIG-FILE")]
    pub config_file: Option<String>,

    /// Workspace root the config path is resolved against
    #[arg(short, long, env = "GITHUB_WORKSPACE")]
    pub workspace: Option<PathBuf>,
}

impl SourceArgs {
    /// Builds a resolver for these arguments
    pub fn resolver(&self) -> ConfigResolver {
        ConfigResolver::from_inputs(self.config_file.as_deref(), self.workspace.as_deref())
    }
}
