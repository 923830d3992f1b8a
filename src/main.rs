// Azure Config Loader - environment-scoped Azure configuration for CI
// Copyright (c) 2025 Azure Config Loader Contributors
// Licensed under the MIT License

use azure_config_loader::cli::{Cli, Commands};
use azure_config_loader::logging::{init_logging, LoggingConfig};
use clap::Parser;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = cli.log_level.as_deref().unwrap_or("info");
    let logging_config = LoggingConfig::with_log_dir(cli.log_dir.clone());
    let _guard = match init_logging(log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        "Azure Config Loader"
    );

    let exit_code = match execute_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    drop(_guard);
    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Load(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::ListEnvironments(args) => args.execute(),
    }
}
