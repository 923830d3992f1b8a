//! Configuration document model
//!
//! A [`ConfigDocument`] maps environment names to [`EnvironmentConfig`]
//! sections. Both keep document order, and every key is stored in canonical
//! underscored form regardless of how it was written in the file.

use crate::domain::errors::LoaderError;
use crate::domain::fields::to_canonical;
use crate::domain::result::Result;
use indexmap::IndexMap;
use serde::Serialize;
use serde_yaml::{Mapping, Value};

/// Top-level key holding the environment sections
pub const ENVIRONMENTS_KEY: &str = "environments";

/// Field values for a single environment, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EnvironmentConfig {
    fields: IndexMap<String, String>,
}

impl EnvironmentConfig {
    /// Creates an environment from already-canonical field names
    pub fn new(fields: IndexMap<String, String>) -> Self {
        Self { fields }
    }

    /// Looks up a field by canonical or hyphenated name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .or_else(|| self.fields.get(&to_canonical(name)))
            .map(String::as_str)
    }

    /// Returns the value only when the field is present and non-empty
    pub fn get_non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.is_empty())
    }

    /// Iterates over `(canonical name, value)` pairs in document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Canonical field names in document order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvironmentConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (to_canonical(&k.into()), v.into()))
                .collect(),
        )
    }
}

/// A loaded configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigDocument {
    environments: IndexMap<String, EnvironmentConfig>,
}

impl ConfigDocument {
    /// Builds a document from a parsed YAML value
    ///
    /// YAML merge keys (`<<: *anchor`) are applied and keys are normalized
    /// to underscored form first. Fails with [`LoaderError::Schema`] when the
    /// value does not have the `environments -> name -> field -> scalar` shape.
    pub fn from_value(mut value: Value) -> Result<Self> {
        value
            .apply_merge()
            .map_err(|e| LoaderError::Schema(format!("invalid merge key: {e}")))?;

        let root = match normalize_keys(value) {
            Value::Mapping(root) => root,
            Value::Null => {
                return Err(LoaderError::Schema(format!(
                    "missing \"{ENVIRONMENTS_KEY}\" key"
                )))
            }
            _ => {
                return Err(LoaderError::Schema(
                    "top-level value must be a mapping".to_string(),
                ))
            }
        };

        let sections = match root.get(ENVIRONMENTS_KEY) {
            Some(Value::Mapping(sections)) => sections,
            Some(Value::Null) | None => {
                return Err(LoaderError::Schema(format!(
                    "missing \"{ENVIRONMENTS_KEY}\" key"
                )))
            }
            Some(_) => {
                return Err(LoaderError::Schema(format!(
                    "\"{ENVIRONMENTS_KEY}\" must be a mapping of environment names"
                )))
            }
        };

        let mut environments = IndexMap::with_capacity(sections.len());
        for (key, section) in sections {
            let name = scalar_to_string(key).ok_or_else(|| {
                LoaderError::Schema("environment names must be scalar values".to_string())
            })?;
            let config = environment_from_value(&name, section)?;
            environments.insert(name, config);
        }

        Ok(Self { environments })
    }

    /// Looks up an environment by name, falling back to its canonical form
    pub fn environment(&self, name: &str) -> Option<&EnvironmentConfig> {
        self.environments
            .get(name)
            .or_else(|| self.environments.get(&to_canonical(name)))
    }

    /// Environment names in document order
    pub fn environment_names(&self) -> Vec<String> {
        self.environments.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.environments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }
}

fn environment_from_value(name: &str, value: &Value) -> Result<EnvironmentConfig> {
    let section = match value {
        Value::Mapping(section) => section,
        Value::Null => return Ok(EnvironmentConfig::default()),
        _ => {
            return Err(LoaderError::Schema(format!(
                "environment '{name}' must be a mapping of field names to values"
            )))
        }
    };

    let mut fields = IndexMap::with_capacity(section.len());
    for (key, field_value) in section {
        let field = scalar_to_string(key).ok_or_else(|| {
            LoaderError::Schema(format!(
                "environment '{name}' has a non-scalar field name"
            ))
        })?;
        let text = match field_value {
            Value::Null => String::new(),
            other => scalar_to_string(other).ok_or_else(|| {
                LoaderError::Schema(format!(
                    "field '{field}' in environment '{name}' must be a scalar value"
                ))
            })?,
        };
        fields.insert(field, text);
    }

    Ok(EnvironmentConfig::new(fields))
}

/// Rewrites every mapping key from hyphenated to underscored form
///
/// Recurses through nested mappings and sequences; values are left untouched.
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Mapping(mapping) => {
            let mut normalized = Mapping::with_capacity(mapping.len());
            for (key, inner) in mapping {
                let key = match key {
                    Value::String(s) => Value::String(to_canonical(&s)),
                    other => other,
                };
                normalized.insert(key, normalize_keys(inner));
            }
            Value::Mapping(normalized)
        }
        Value::Sequence(items) => Value::Sequence(items.into_iter().map(normalize_keys).collect()),
        Value::Tagged(tagged) => normalize_keys(tagged.value),
        other => other,
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        _ => None,
    }
}
