//! Field name forms
//!
//! Configuration documents store field names in underscored (canonical) form.
//! Everything crossing the CI boundary (output names, masking decisions, error
//! messages) uses the hyphenated (external) form.

/// Fields every environment must define
pub const REQUIRED_FIELDS: [&str; 3] = ["client_id", "tenant_id", "subscription_id"];

/// Fields exported as `AZURE_*` environment variables when present
pub const WELL_KNOWN_FIELDS: [&str; 5] = [
    "client_id",
    "tenant_id",
    "subscription_id",
    "resource_group",
    "location",
];

/// Prefix for exported environment variables
pub const ENV_VAR_PREFIX: &str = "AZURE_";

/// Converts a raw document key to canonical underscored form
pub fn to_canonical(name: &str) -> String {
    name.replace('-', "_")
}

/// Converts a canonical field name to its external hyphenated form
///
/// Every underscore becomes a hyphen, nothing else changes.
///
/// ```
/// use azure_config_loader::domain::fields::to_external;
///
/// assert_eq!(to_external("client_id"), "client-id");
/// assert_eq!(to_external("a__b"), "a--b");
/// ```
pub fn to_external(name: &str) -> String {
    name.replace('_', "-")
}

/// Environment variable name for a canonical field name
///
/// ```
/// use azure_config_loader::domain::fields::env_var_name;
///
/// assert_eq!(env_var_name("client_id"), "AZURE_CLIENT_ID");
/// ```
pub fn env_var_name(name: &str) -> String {
    format!("{ENV_VAR_PREFIX}{}", to_canonical(name).to_uppercase())
}

/// Human readable label for an external field name
///
/// Hyphens become spaces and the first letter is capitalized.
pub fn humanize(external_name: &str) -> String {
    let spaced = external_name.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
