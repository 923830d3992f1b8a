//! Logging and observability
//!
//! Structured diagnostics use `tracing`. Console output goes to stderr so
//! stdout stays reserved for runner workflow commands; an optional JSON file
//! layer with daily rotation can be enabled with `--log-dir`.
//!
//! # Example
//!
//! ```no_run
//! use azure_config_loader::logging::{init_logging, LoggingConfig};
//!
//! let _guard = init_logging("info", &LoggingConfig::default())
//!     .expect("Failed to initialize logging");
//! tracing::info!("Loader started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingConfig, LoggingGuard};

/// Log the rule that decided whether a field is masked
///
/// # Example
///
/// ```no_run
/// use azure_config_loader::log_mask_decision;
/// use azure_config_loader::masking::MaskingPolicy;
///
/// let policy = MaskingPolicy::builtin().unwrap();
/// let decision = policy.evaluate("api-key");
/// log_mask_decision!("api-key", decision);
/// ```
#[macro_export]
macro_rules! log_mask_decision {
    ($field:expr, $decision:expr) => {
        tracing::debug!(
            field = %$field,
            masked = $decision.masked,
            rule = %$decision.rule,
            "Masking decision"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use azure_config_loader::log_error_with_context;
/// use azure_config_loader::domain::LoaderError;
///
/// let error = LoaderError::Schema("missing \"environments\" key".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
