// Azure Config Loader - environment-scoped Azure configuration for CI
// Copyright (c) 2025 Azure Config Loader Contributors
// Licensed under the MIT License

//! # Azure Config Loader
//!
//! Loads an environment-scoped YAML configuration file, validates its Azure
//! identifiers, masks sensitive values and publishes the result as step
//! outputs and environment variables for a CI pipeline.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Run orchestration and failure reporting
//! - [`config`] - Config Resolver: loading, key normalization, validation
//! - [`masking`] - Masking Policy Evaluator
//! - [`output`] - Output Projector and run summary
//! - [`adapters`] - CI host integrations (GitHub Actions, in-memory)
//! - [`domain`] - Error types and field name forms
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use azure_config_loader::adapters::host::RecordingHost;
//! use azure_config_loader::core::{run, ActionInputs};
//!
//! let inputs = ActionInputs::new("production").with_mask_fields("build-token");
//! let mut host = RecordingHost::new();
//! let summary = run(&inputs, &mut host).expect("configuration loads");
//!
//! println!(
//!     "{} fields processed, {} masked, {} safe",
//!     summary.fields_processed, summary.masked_count, summary.safe_count
//! );
//! ```
//!
//! ## Masking
//!
//! Field names are checked in hyphenated form against, in order: the
//! never-mask list, the always-mask list, safe patterns, then mask patterns.
//! The first match decides; unmatched fields stay visible.
//!
//! ```rust
//! use azure_config_loader::masking::MaskingPolicy;
//!
//! let policy = MaskingPolicy::builtin().unwrap();
//! assert!(policy.should_mask("access-key"));
//! assert!(!policy.should_mask("secret-database-id"));
//! ```
//!
//! ## Error Handling
//!
//! Every failure is a [`domain::LoaderError`] and aborts the run:
//!
//! ```rust,no_run
//! use azure_config_loader::config::ConfigResolver;
//! use azure_config_loader::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let mut resolver = ConfigResolver::new("config.yml");
//!     let config = resolver.get_environment("staging")?;
//!     ConfigResolver::validate(config)?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod masking;
pub mod output;
