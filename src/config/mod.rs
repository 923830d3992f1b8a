//! Environment configuration loading.
//!
//! # Overview
//!
//! The environments file is a YAML document with a single top-level
//! `environments` key:
//!
//! ```yaml
//! environments:
//!   development:
//!     client-id: "11111111-1111-1111-1111-111111111111"
//!     tenant-id: "22222222-2222-2222-2222-222222222222"
//!     subscription-id: "33333333-3333-3333-3333-333333333333"
//!     resource-group: "dev-rg"
//!     location: "westus2"
//!   production:
//!     client_id: "44444444-4444-4444-4444-444444444444"
//!     tenant_id: "55555555-5555-5555-5555-555555555555"
//!     subscription_id: "66666666-6666-6666-6666-666666666666"
//!     api_key: "${{ secrets.API_KEY }}"
//! ```
//!
//! Keys may be hyphenated or underscored; they are stored underscored.
//! `client_id`, `tenant_id` and `subscription_id` are required and must be
//! UUID-shaped. Any other field is passed through.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use azure_config_loader::config::ConfigResolver;
//!
//! # fn example() -> azure_config_loader::domain::Result<()> {
//! let mut resolver = ConfigResolver::new(".github/config/azure-environments.yml");
//! println!("Available: {}", resolver.list_environments()?.join(", "));
//!
//! let config = resolver.get_environment("production")?;
//! ConfigResolver::validate(config)?;
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::{is_uuid_format, load_document, ConfigResolver, DEFAULT_CONFIG_FILE};
pub use schema::{normalize_keys, ConfigDocument, EnvironmentConfig};
pub use secret::{mask_value, MaskedSecret, MaskedValue};
