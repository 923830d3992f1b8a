//! GitHub Actions host
//!
//! Outputs and environment variables are appended to the files named by
//! `GITHUB_OUTPUT` and `GITHUB_ENV`; secrets, debug lines and errors are
//! issued as workflow commands on stdout; the step summary is appended to
//! `GITHUB_STEP_SUMMARY`.

use super::traits::ActionHost;
use crate::domain::errors::LoaderError;
use crate::domain::Result;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const OUTPUT_FILE_VAR: &str = "GITHUB_OUTPUT";
pub const ENV_FILE_VAR: &str = "GITHUB_ENV";
pub const SUMMARY_FILE_VAR: &str = "GITHUB_STEP_SUMMARY";

/// File command targets provided by the runner
#[derive(Debug, Clone, Default)]
pub struct HostFiles {
    /// `GITHUB_OUTPUT`
    pub output: Option<PathBuf>,
    /// `GITHUB_ENV`
    pub env: Option<PathBuf>,
    /// `GITHUB_STEP_SUMMARY`
    pub summary: Option<PathBuf>,
}

impl HostFiles {
    /// Reads the file command paths from the runner environment
    pub fn from_env() -> Self {
        fn path_var(name: &str) -> Option<PathBuf> {
            std::env::var_os(name)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        }

        Self {
            output: path_var(OUTPUT_FILE_VAR),
            env: path_var(ENV_FILE_VAR),
            summary: path_var(SUMMARY_FILE_VAR),
        }
    }
}

/// Host that speaks the GitHub Actions runner protocol
pub struct GitHubActionsHost<W: Write> {
    out: W,
    files: HostFiles,
    failed: bool,
}

impl GitHubActionsHost<io::Stdout> {
    /// Host writing workflow commands to stdout, with file targets from the environment
    pub fn from_env() -> Self {
        Self::new(io::stdout(), HostFiles::from_env())
    }
}

impl<W: Write> GitHubActionsHost<W> {
    /// Host writing workflow commands to `out`
    pub fn new(out: W, files: HostFiles) -> Self {
        Self {
            out,
            files,
            failed: false,
        }
    }

    /// Whether `set_failed` has been called
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Consumes the host and returns the command writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn issue(&mut self, command: &str, properties: &[(&str, &str)], message: &str) -> io::Result<()> {
        let mut line = format!("::{command}");
        if !properties.is_empty() {
            let props: Vec<String> = properties
                .iter()
                .map(|(k, v)| format!("{k}={}", escape_property(v)))
                .collect();
            line.push(' ');
            line.push_str(&props.join(","));
        }
        line.push_str("::");
        line.push_str(&escape_data(message));
        writeln!(self.out, "{line}")
    }

    fn log_line(&mut self, command: Option<&str>, message: &str) {
        let result = match command {
            Some(command) => self.issue(command, &[], message),
            None => writeln!(self.out, "{message}"),
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to write log line to runner");
        }
    }
}

impl<W: Write> ActionHost for GitHubActionsHost<W> {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        match self.files.output.clone() {
            Some(path) => append_key_value(&path, name, value),
            None => self
                .issue("set-output", &[("name", name)], value)
                .map_err(LoaderError::from),
        }
    }

    fn set_secret(&mut self, value: &str) -> Result<()> {
        // The runner matches masks per line.
        for line in value.lines().filter(|l| !l.trim().is_empty()) {
            self.issue("add-mask", &[], line)?;
        }
        Ok(())
    }

    fn export_variable(&mut self, name: &str, value: &str) -> Result<()> {
        std::env::set_var(name, value);
        match self.files.env.clone() {
            Some(path) => append_key_value(&path, name, value),
            None => self
                .issue("set-env", &[("name", name)], value)
                .map_err(LoaderError::from),
        }
    }

    fn info(&mut self, message: &str) {
        self.log_line(None, message);
    }

    fn debug(&mut self, message: &str) {
        self.log_line(Some("debug"), message);
    }

    fn error(&mut self, message: &str) {
        self.log_line(Some("error"), message);
    }

    fn set_failed(&mut self, message: &str) {
        self.failed = true;
        self.error(message);
    }

    fn append_summary(&mut self, markdown: &str) -> Result<()> {
        match self.files.summary.clone() {
            Some(path) => append_to_file(&path, markdown),
            None => {
                tracing::debug!("{SUMMARY_FILE_VAR} not set, skipping step summary");
                Ok(())
            }
        }
    }
}

/// Formats a `name<<delimiter` block for a file command
pub fn format_key_value(name: &str, value: &str, delimiter: &str) -> Result<String> {
    if name.contains(delimiter) || value.contains(delimiter) {
        return Err(LoaderError::Unexpected(format!(
            "Value for '{name}' contains the file command delimiter"
        )));
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

fn append_key_value(path: &Path, name: &str, value: &str) -> Result<()> {
    let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
    let block = format_key_value(name, value, &delimiter)?;
    append_to_file(path, &block)
}

fn append_to_file(path: &Path, contents: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            LoaderError::Unexpected(format!("Failed to open {}: {}", path.display(), e))
        })?;
    file.write_all(contents.as_bytes()).map_err(|e| {
        LoaderError::Unexpected(format!("Failed to write {}: {}", path.display(), e))
    })
}

/// Escapes workflow command message data
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escapes workflow command property values
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn host_with_files(dir: &TempDir) -> GitHubActionsHost<Vec<u8>> {
        GitHubActionsHost::new(
            Vec::new(),
            HostFiles {
                output: Some(dir.path().join("output")),
                env: Some(dir.path().join("env")),
                summary: Some(dir.path().join("summary.md")),
            },
        )
    }

    fn stdout_of(host: GitHubActionsHost<Vec<u8>>) -> String {
        String::from_utf8(host.into_inner()).unwrap()
    }

    #[test]
    fn test_escape_data() {
        assert_eq!(escape_data("50%\r\nnext"), "50%25%0D%0Anext");
    }

    #[test]
    fn test_escape_property() {
        assert_eq!(escape_property("a:b,c"), "a%3Ab%2Cc");
    }

    #[test]
    fn test_output_written_to_file() {
        let dir = TempDir::new().unwrap();
        let mut host = host_with_files(&dir);
        host.set_output("client-id", "11111111-1111-1111-1111-111111111111")
            .unwrap();

        let contents = std::fs::read_to_string(dir.path().join("output")).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("client-id<<ghadelimiter_"));
        assert_eq!(lines[1], "11111111-1111-1111-1111-111111111111");
        assert_eq!(lines[2], lines[0].trim_start_matches("client-id<<"));
    }

    #[test]
    fn test_output_falls_back_to_command() {
        let mut host = GitHubActionsHost::new(Vec::new(), HostFiles::default());
        host.set_output("location", "eastus").unwrap();
        assert_eq!(stdout_of(host), "::set-output name=location::eastus\n");
    }

    #[test]
    fn test_secret_masked_per_line() {
        let mut host = GitHubActionsHost::new(Vec::new(), HostFiles::default());
        host.set_secret("line-one\nline-two").unwrap();
        assert_eq!(
            stdout_of(host),
            "::add-mask::line-one\n::add-mask::line-two\n"
        );
    }

    #[test]
    fn test_export_variable_sets_process_env_and_file() {
        let dir = TempDir::new().unwrap();
        let mut host = host_with_files(&dir);
        host.export_variable("AZURE_LOADER_TEST_VAR", "value").unwrap();

        assert_eq!(std::env::var("AZURE_LOADER_TEST_VAR").unwrap(), "value");
        let contents = std::fs::read_to_string(dir.path().join("env")).unwrap();
        assert!(contents.starts_with("AZURE_LOADER_TEST_VAR<<ghadelimiter_"));
        std::env::remove_var("AZURE_LOADER_TEST_VAR");
    }

    #[test]
    fn test_log_commands() {
        let mut host = GitHubActionsHost::new(Vec::new(), HostFiles::default());
        host.info("plain");
        host.debug("details");
        host.set_failed("it broke");
        assert!(host.has_failed());
        assert_eq!(stdout_of(host), "plain\n::debug::details\n::error::it broke\n");
    }

    #[test]
    fn test_summary_appended() {
        let dir = TempDir::new().unwrap();
        let mut host = host_with_files(&dir);
        host.append_summary("## One\n").unwrap();
        host.append_summary("## Two\n").unwrap();
        let contents = std::fs::read_to_string(dir.path().join("summary.md")).unwrap();
        assert_eq!(contents, "## One\n## Two\n");
    }

    #[test]
    fn test_delimiter_collision_rejected() {
        assert!(format_key_value("name", "x ghadelimiter_1 y", "ghadelimiter_1").is_err());
    }
}
