// src/config.rs
//! Client configuration: defaults, optional `neurodoc.yml`, env overrides.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{NeuroDocError, Result};
use crate::graph::LayoutConfig;

pub const DEFAULT_CONFIG_FILE: &str = "neurodoc.yml";
pub const CONFIG_PATH_ENV: &str = "NEURODOC_CONFIG";
pub const API_URL_ENV: &str = "NEURODOC_API_URL";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base address of the assistant service, e.g. `http://localhost:8000`.
    pub api_url: String,
    pub request_timeout_secs: u64,
    pub log_dir: PathBuf,
    pub layout: LayoutConfig,
    /// File the values were read from; `None` for built-in defaults.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000".to_string(),
            request_timeout_secs: 120,
            log_dir: PathBuf::from("./logs"),
            layout: LayoutConfig::default(),
            source: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub error: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

impl ClientConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&content)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Defaults, then the config file (explicit or `./neurodoc.yml`), then
    /// the `NEURODOC_API_URL` override. The result is validated.
    pub fn resolve(explicit_path: Option<PathBuf>, api_url_override: Option<String>) -> Result<Self> {
        let mut config = match explicit_path {
            Some(path) => Self::load_file(&path)?,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::load_file(fallback)?
                } else {
                    Self::default()
                }
            }
        };

        if let Some(url) = api_url_override.filter(|u| !u.trim().is_empty()) {
            config.api_url = url;
        }
        config.api_url = config.api_url.trim_end_matches('/').to_string();

        let errors = config.validate();
        if !errors.is_empty() {
            let report = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(NeuroDocError::Config(report));
        }
        Ok(config)
    }

    pub fn from_env() -> Result<Self> {
        Self::resolve(
            std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from),
            std::env::var(API_URL_ENV).ok(),
        )
    }

    /// Startup log line describing where the values came from.
    pub fn describe_source(&self) -> String {
        match &self.source {
            Some(path) => format!("Loaded configuration from {}", path.display()),
            None => "Using built-in configuration defaults".to_string(),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let mut check = |ok: bool, field: &str, error: &str| {
            if !ok {
                errors.push(ValidationError {
                    field: field.to_string(),
                    error: error.to_string(),
                });
            }
        };

        check(
            self.api_url.starts_with("http://") || self.api_url.starts_with("https://"),
            "api_url",
            "must start with http:// or https://",
        );
        check(self.request_timeout_secs > 0, "request_timeout_secs", "must be greater than 0");
        check(self.layout.node_width > 0.0, "layout.node_width", "must be greater than 0");
        check(self.layout.node_height > 0.0, "layout.node_height", "must be greater than 0");
        check(self.layout.rank_separation >= 0.0, "layout.rank_separation", "must not be negative");
        check(self.layout.node_separation >= 0.0, "layout.node_separation", "must not be negative");
        check(self.layout.margin > 0.0, "layout.margin", "must be greater than 0");

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
api_url: "https://neurodoc.example.com"
layout:
  node_width: 180.0
"#;
        let config = ClientConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.api_url, "https://neurodoc.example.com");
        assert_eq!(config.request_timeout_secs, 120);
        assert_eq!(config.layout.node_width, 180.0);
        assert_eq!(config.layout.node_height, 50.0);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_invalid_values_are_all_reported() {
        let yaml = r#"
api_url: "ftp://nope"
request_timeout_secs: 0
layout:
  margin: 0.0
"#;
        let config = ClientConfig::from_yaml(yaml).unwrap();
        let fields: Vec<String> = config.validate().into_iter().map(|e| e.field).collect();

        assert_eq!(fields, vec!["api_url", "request_timeout_secs", "layout.margin"]);
    }

    #[test]
    fn test_resolve_from_file_with_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_url: \"http://from-file:9000\"\nrequest_timeout_secs: 5").unwrap();

        let config = ClientConfig::resolve(
            Some(file.path().to_path_buf()),
            Some("http://override:7000/".to_string()),
        )
        .unwrap();

        assert_eq!(config.api_url, "http://override:7000");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.source.as_deref(), Some(file.path()));
        assert_eq!(
            config.describe_source(),
            format!("Loaded configuration from {}", file.path().display())
        );
    }

    #[test]
    fn test_defaults_describe_builtin_source() {
        let config = ClientConfig::default();
        assert_eq!(config.describe_source(), "Using built-in configuration defaults");
    }

    #[test]
    fn test_resolve_rejects_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_url: \"localhost\"").unwrap();

        let result = ClientConfig::resolve(Some(file.path().to_path_buf()), None);
        assert!(matches!(result, Err(NeuroDocError::Config(_))));
    }
}
