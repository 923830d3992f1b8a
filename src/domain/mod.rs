//! Domain types shared across the loader.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Error taxonomy** ([`LoaderError`]) covering every terminal failure of a run
//! - **Result type alias** ([`Result`])
//! - **Field name forms** ([`fields`]): canonical underscored names used in the
//!   document and hyphenated external names used at the CI boundary
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`]:
//!
//! ```rust
//! use azure_config_loader::domain::{LoaderError, Result};
//!
//! fn lookup(found: bool) -> Result<()> {
//!     if !found {
//!         return Err(LoaderError::Schema("missing \"environments\" key".into()));
//!     }
//!     Ok(())
//! }
//! # assert!(lookup(false).is_err());
//! ```

pub mod errors;
pub mod fields;
pub mod result;

pub use errors::LoaderError;
pub use result::Result;
