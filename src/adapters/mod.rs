//! External system integrations.
//!
//! The only external system the loader talks to is the CI host. It is reached
//! through the [`host::ActionHost`] trait so the resolver and projector can be
//! driven against the real GitHub Actions runner or an in-memory recorder.
//!
//! # Example
//!
//! ```rust
//! use azure_config_loader::adapters::host::{ActionHost, RecordingHost};
//!
//! let mut host = RecordingHost::new();
//! host.set_output("location", "eastus").unwrap();
//! assert_eq!(host.output("location"), Some("eastus"));
//! ```
//!
//! In a workflow step, [`host::GitHubActionsHost::from_env`] picks up
//! `GITHUB_OUTPUT`, `GITHUB_ENV` and `GITHUB_STEP_SUMMARY` from the runner.

pub mod host;
