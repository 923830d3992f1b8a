//! Core orchestration for a loader run.
//!
//! # Workflow
//!
//! 1. **Resolve inputs**: environment name, config file, masking additions
//! 2. **Load**: read and normalize the environments file
//! 3. **Look up**: select the requested environment section
//! 4. **Validate**: check required identifiers
//! 5. **Project**: publish outputs, register secrets, export `AZURE_*` variables
//! 6. **Report**: write the step summary
//!
//! Any failure aborts the run; [`runner::run`] reports it to the host with
//! remediation hints and returns it to the caller.
//!
//! # Example
//!
//! ```rust,no_run
//! use azure_config_loader::adapters::host::GitHubActionsHost;
//! use azure_config_loader::core::{run, ActionInputs};
//!
//! let inputs = ActionInputs::new("production");
//! let mut host = GitHubActionsHost::from_env();
//! match run(&inputs, &mut host) {
//!     Ok(summary) => println!("{} fields processed", summary.fields_processed),
//!     Err(_) => std::process::exit(1),
//! }
//! ```

pub mod runner;

pub use runner::{execute, report_failure, run, ActionInputs};
