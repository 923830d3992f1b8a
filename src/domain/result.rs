//! Result type alias for loader operations

use super::errors::LoaderError;

/// Result type alias using [`LoaderError`]
///
/// # Examples
///
/// ```
/// use azure_config_loader::domain::{LoaderError, Result};
///
/// fn failing_function() -> Result<()> {
///     Err(LoaderError::Validation("Invalid input".to_string()))
/// }
/// assert!(failing_function().is_err());
/// ```
pub type Result<T> = std::result::Result<T, LoaderError>;
