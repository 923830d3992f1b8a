//! Config Resolver
//!
//! Loads the environments file relative to the workspace root, caches the
//! parsed document for the lifetime of the resolver, looks up environment
//! sections and validates their identifier fields.

use super::schema::{ConfigDocument, EnvironmentConfig};
use crate::domain::errors::LoaderError;
use crate::domain::fields::{to_external, REQUIRED_FIELDS};
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Default location of the environments file, relative to the workspace
pub const DEFAULT_CONFIG_FILE: &str = ".github/config/azure-environments.yml";

/// Environment variable naming the CI workspace root
pub const WORKSPACE_ENV_VAR: &str = "GITHUB_WORKSPACE";

const UUID_PATTERN: &str =
    r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$";

fn uuid_regex() -> &'static Regex {
    static UUID_REGEX: OnceLock<Regex> = OnceLock::new();
    UUID_REGEX.get_or_init(|| Regex::new(UUID_PATTERN).expect("UUID pattern compiles"))
}

/// Returns true if `value` has the `8-4-4-4-12` hex digit layout
pub fn is_uuid_format(value: &str) -> bool {
    uuid_regex().is_match(value)
}

/// Reads and parses a configuration document from an absolute or relative path
///
/// # Errors
///
/// - [`LoaderError::NotFound`] if the file does not exist
/// - [`LoaderError::Parse`] if the content is not valid YAML or a merge key is malformed
/// - [`LoaderError::Schema`] if the document lacks an `environments` mapping
pub fn load_document(path: &Path) -> Result<ConfigDocument> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(LoaderError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => {
            return Err(LoaderError::Unexpected(format!(
                "Failed to read configuration file {}: {}",
                path.display(),
                e
            )))
        }
    };

    let parse_error = |e: serde_yaml::Error| LoaderError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let mut raw: serde_yaml::Value = serde_yaml::from_str(&contents).map_err(parse_error)?;
    raw.apply_merge().map_err(parse_error)?;

    ConfigDocument::from_value(raw)
}

/// Resolves environment configuration from a single file
///
/// The document is read on first access and reused afterwards.
///
/// ```no_run
/// use azure_config_loader::config::ConfigResolver;
///
/// # fn example() -> azure_config_loader::domain::Result<()> {
/// let mut resolver = ConfigResolver::new(".github/config/azure-environments.yml");
/// let production = resolver.get_environment("production")?;
/// ConfigResolver::validate(production)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConfigResolver {
    config_file: PathBuf,
    workspace: PathBuf,
    document: Option<ConfigDocument>,
}

impl ConfigResolver {
    /// Creates a resolver rooted at `$GITHUB_WORKSPACE`, or the current directory
    pub fn new(config_file: impl Into<PathBuf>) -> Self {
        let workspace = std::env::var_os(WORKSPACE_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_default();
        Self::with_workspace(config_file, workspace)
    }

    /// Creates a resolver rooted at an explicit workspace directory
    pub fn with_workspace(config_file: impl Into<PathBuf>, workspace: impl Into<PathBuf>) -> Self {
        Self {
            config_file: config_file.into(),
            workspace: workspace.into(),
            document: None,
        }
    }

    /// Creates a resolver from optional invocation inputs
    ///
    /// A blank or absent `config_file` falls back to [`DEFAULT_CONFIG_FILE`];
    /// an absent `workspace` falls back to [`ConfigResolver::new`].
    pub fn from_inputs(config_file: Option<&str>, workspace: Option<&Path>) -> Self {
        let config_file = config_file
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .unwrap_or(DEFAULT_CONFIG_FILE);
        match workspace {
            Some(workspace) => Self::with_workspace(config_file, workspace),
            None => Self::new(config_file),
        }
    }

    /// Full path of the configuration file; absolute paths are kept as-is
    pub fn resolved_path(&self) -> PathBuf {
        self.workspace.join(&self.config_file)
    }

    /// Loads the document, reading the file only on the first call
    pub fn load(&mut self) -> Result<&ConfigDocument> {
        let document = match self.document.take() {
            Some(document) => document,
            None => {
                let path = self.resolved_path();
                tracing::debug!(path = %path.display(), "Loading configuration");
                let document = load_document(&path)?;
                tracing::debug!(
                    environments = document.len(),
                    "Configuration document parsed"
                );
                document
            }
        };
        Ok(self.document.insert(document))
    }

    /// Returns the named environment section
    ///
    /// # Errors
    ///
    /// [`LoaderError::EnvironmentNotFound`] listing every known environment in
    /// document order, or any error from [`ConfigResolver::load`].
    pub fn get_environment(&mut self, name: &str) -> Result<&EnvironmentConfig> {
        let document = self.load()?;
        document
            .environment(name)
            .ok_or_else(|| LoaderError::EnvironmentNotFound {
                name: name.to_string(),
                available: document.environment_names(),
            })
    }

    /// All environment names in document order
    pub fn list_environments(&mut self) -> Result<Vec<String>> {
        Ok(self.load()?.environment_names())
    }

    /// Checks required identifier fields
    ///
    /// Missing (absent or empty) required fields are reported together first.
    /// Otherwise every identifier that is not UUID-shaped is reported with its
    /// hyphenated name and offending value.
    pub fn validate(config: &EnvironmentConfig) -> Result<()> {
        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|field| config.get_non_empty(field).is_none())
            .map(|field| to_external(field))
            .collect();

        if !missing.is_empty() {
            return Err(LoaderError::Validation(format!(
                "Missing required fields in configuration: {}",
                missing.join(", ")
            )));
        }

        let malformed: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter_map(|field| {
                let value = config.get(field).unwrap_or_default();
                (!is_uuid_format(value)).then(|| {
                    format!(
                        "{} must be a valid UUID format: {}",
                        to_external(field),
                        value
                    )
                })
            })
            .collect();

        if !malformed.is_empty() {
            return Err(LoaderError::Validation(malformed.join("; ")));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    const VALID: &str = r#"
environments:
  development:
    client_id: "11111111-1111-1111-1111-111111111111"
    tenant_id: "22222222-2222-2222-2222-222222222222"
    subscription_id: "33333333-3333-3333-3333-333333333333"
    resource_group: "dev-rg"
    location: "westus2"
  production:
    client-id: "44444444-4444-4444-4444-444444444444"
    tenant-id: "55555555-5555-5555-5555-555555555555"
    subscription-id: "66666666-6666-6666-6666-666666666666"
"#;

    fn write_config(dir: &TempDir, name: &str, contents: &str) {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    fn env(pairs: &[(&str, &str)]) -> EnvironmentConfig {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_load_relative_to_workspace() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, DEFAULT_CONFIG_FILE, VALID);

        let mut resolver = ConfigResolver::with_workspace(DEFAULT_CONFIG_FILE, dir.path());
        assert_eq!(
            resolver.list_environments().unwrap(),
            vec!["development", "production"]
        );
    }

    #[test]
    fn test_absolute_path_ignores_workspace() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(VALID.as_bytes()).unwrap();
        file.flush().unwrap();

        let mut resolver = ConfigResolver::with_workspace(file.path(), "/does/not/exist");
        assert!(resolver.get_environment("production").is_ok());
    }

    #[test]
    fn test_document_is_cached_after_first_load() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "envs.yml", VALID);

        let mut resolver = ConfigResolver::with_workspace("envs.yml", dir.path());
        resolver.load().unwrap();
        fs::remove_file(dir.path().join("envs.yml")).unwrap();

        assert_eq!(resolver.list_environments().unwrap().len(), 2);
    }

    #[test]
    fn test_from_inputs_blank_config_uses_default() {
        let resolver = ConfigResolver::from_inputs(Some("  "), Some(Path::new("/work")));
        assert_eq!(
            resolver.resolved_path(),
            PathBuf::from("/work/.github/config/azure-environments.yml")
        );
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let mut resolver = ConfigResolver::with_workspace("missing.yml", dir.path());
        let err = resolver.load().unwrap_err();
        assert!(matches!(err, LoaderError::NotFound { .. }));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "bad.yml", "environments: [unclosed\n");
        let mut resolver = ConfigResolver::with_workspace("bad.yml", dir.path());
        assert!(matches!(
            resolver.load().unwrap_err(),
            LoaderError::Parse { .. }
        ));
    }

    #[test]
    fn test_missing_environments_key() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "other.yml", "settings:\n  a: b\n");
        let mut resolver = ConfigResolver::with_workspace("other.yml", dir.path());
        assert!(matches!(
            resolver.load().unwrap_err(),
            LoaderError::Schema(_)
        ));
    }

    #[test]
    fn test_shared_defaults_through_anchor() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            "envs.yml",
            r#"
shared: &shared
  tenant_id: "22222222-2222-2222-2222-222222222222"
  subscription_id: "33333333-3333-3333-3333-333333333333"
environments:
  development:
    <<: *shared
    client_id: "11111111-1111-1111-1111-111111111111"
"#,
        );
        let mut resolver = ConfigResolver::with_workspace("envs.yml", dir.path());

        let development = resolver.get_environment("development").unwrap();
        assert!(ConfigResolver::validate(development).is_ok());
    }

    #[test]
    fn test_invalid_merge_value_is_parse_error() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "bad.yml", "environments:\n  dev:\n    <<: not-a-mapping\n");
        let mut resolver = ConfigResolver::with_workspace("bad.yml", dir.path());
        assert!(matches!(
            resolver.load().unwrap_err(),
            LoaderError::Parse { .. }
        ));
    }

    #[test]
    fn test_get_environment_normalizes_keys() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "envs.yml", VALID);
        let mut resolver = ConfigResolver::with_workspace("envs.yml", dir.path());

        let production = resolver.get_environment("production").unwrap();
        assert_eq!(
            production.get("client_id"),
            Some("44444444-4444-4444-4444-444444444444")
        );
        assert_eq!(production.len(), 3);
    }

    #[test]
    fn test_unknown_environment_lists_available() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "envs.yml", VALID);
        let mut resolver = ConfigResolver::with_workspace("envs.yml", dir.path());

        let err = resolver.get_environment("staging").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Environment 'staging' not found"));
        assert!(message.contains("development, production"));
    }

    #[test]
    fn test_validate_accepts_uuids_in_any_case() {
        let config = env(&[
            ("client_id", "ABCDEF01-2345-6789-abcd-ef0123456789"),
            ("tenant_id", "22222222-2222-2222-2222-222222222222"),
            ("subscription_id", "33333333-3333-3333-3333-333333333333"),
        ]);
        assert!(ConfigResolver::validate(&config).is_ok());
    }

    #[test]
    fn test_validate_lists_all_missing_fields() {
        let config = env(&[("client_id", "11111111-1111-1111-1111-111111111111"), ("tenant_id", "")]);
        let err = ConfigResolver::validate(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required fields in configuration: tenant-id, subscription-id"
        );
    }

    #[test]
    fn test_validate_reports_each_malformed_field() {
        let config = env(&[
            ("client_id", "not-a-uuid"),
            ("tenant_id", "22222222-2222-2222-2222-222222222222"),
            ("subscription_id", "{33333333-3333-3333-3333-333333333333}"),
        ]);
        let message = ConfigResolver::validate(&config).unwrap_err().to_string();
        assert!(message.contains("client-id must be a valid UUID format: not-a-uuid"));
        assert!(message.contains(
            "subscription-id must be a valid UUID format: {33333333-3333-3333-3333-333333333333}"
        ));
        assert!(!message.contains("tenant-id"));
    }

    #[test]
    fn test_is_uuid_format() {
        assert!(is_uuid_format("7d44b88c-4199-4bad-97dc-d78268e01398"));
        assert!(!is_uuid_format("7d44b88c41994bad97dcd78268e01398"));
        assert!(!is_uuid_format("7d44b88c-4199-4bad-97dc-d78268e0139"));
        assert!(!is_uuid_format("g d44b88c-4199-4bad-97dc-d78268e01398"));
    }
}
