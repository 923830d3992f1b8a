//! Protected storage for masked field values
//!
//! Values that the masking policy marks as sensitive are moved into a
//! [`MaskedSecret`] as soon as the decision is made. The wrapper zeroes its
//! memory on drop and never prints the value through `Debug`.
//!
//! # Example
//!
//! ```rust
//! use azure_config_loader::config::mask_value;
//! use secrecy::ExposeSecret;
//!
//! let secret = mask_value("secret-api-key");
//! assert_eq!(secret.expose_secret().as_ref(), "secret-api-key");
//! assert!(!format!("{secret:?}").contains("secret-api-key"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret};
use zeroize::Zeroize;

/// String newtype that satisfies the `secrecy` trait bounds
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct MaskedValue(String);

impl CloneableSecret for MaskedValue {}
impl DebugSecret for MaskedValue {}

impl From<&str> for MaskedValue {
    fn from(s: &str) -> Self {
        MaskedValue(s.to_string())
    }
}

impl AsRef<str> for MaskedValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A masked value; zeroed on drop, redacted in `Debug`
pub type MaskedSecret = Secret<MaskedValue>;

/// Copies a value into protected storage
#[inline]
pub fn mask_value(value: &str) -> MaskedSecret {
    Secret::new(MaskedValue::from(value))
}
