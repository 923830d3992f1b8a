//! Field masking policy
//!
//! Decides whether a configuration field holds a secret, based on its
//! hyphenated name. The built-in rules can be extended per run through the
//! `mask-fields` and `safe-fields` inputs.
//!
//! # Example
//!
//! ```rust
//! use azure_config_loader::masking::{should_mask, MaskingPolicy};
//!
//! let policy = MaskingPolicy::builtin().unwrap();
//! assert!(should_mask("client-secret", &policy));
//! assert!(!should_mask("subscription-id", &policy));
//! assert!(!should_mask("secret-database-id", &policy));
//! ```

pub mod patterns;
pub mod policy;

pub use patterns::CompiledPattern;
pub use policy::{should_mask, MaskDecision, MaskRule, MaskingPolicy};
