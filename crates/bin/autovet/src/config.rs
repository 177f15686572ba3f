//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `autovet.toml` in the working directory unless another file
//! is given on the command line. Every field has a sensible default so the
//! file is optional. Environment variables take precedence over file
//! values, and a path given on the command line beats both.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "autovet.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// What to validate.
    pub scan: ScanConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Document discovery settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// File or directory to validate.
    pub root: PathBuf,
    /// File extensions (without the dot) treated as documents.
    pub extensions: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("AUTOVET_ROOT") {
            self.scan.root = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("AUTOVET_EXTENSIONS") {
            self.scan.extensions = split_extensions(&val);
        }
        if let Ok(val) = std::env::var("AUTOVET_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.scan.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "at least one file extension is required".to_string(),
            ));
        }
        if self.scan.extensions.iter().any(|ext| ext.starts_with('.')) {
            return Err(ConfigError::Validation(
                "extensions must not start with '.'".to_string(),
            ));
        }
        Ok(())
    }

    /// Replace the scan root, e.g. with a path given on the command line.
    pub fn override_root(&mut self, root: PathBuf) {
        self.scan.root = root;
    }
}

fn split_extensions(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|ext| !ext.is_empty())
        .map(ToString::to_string)
        .collect()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: autovet_adapter_yaml_fs::DEFAULT_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "autovet=warn,autovet_app=warn,autovet_adapter_yaml_fs=warn".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.scan.root, PathBuf::from("."));
        assert_eq!(config.scan.extensions, ["yaml", "yml", "json"]);
        assert!(config.logging.filter.contains("autovet=warn"));
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.scan.root, PathBuf::from("."));
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [scan]
            root = 'config/automations'
            extensions = ['yaml']

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.scan.root, PathBuf::from("config/automations"));
        assert_eq!(config.scan.extensions, ["yaml"]);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [logging]
            filter = 'trace'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.filter, "trace");
        assert_eq!(config.scan.extensions.len(), 3);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file(Path::new("nonexistent.toml")).unwrap();
        assert_eq!(config.scan.root, PathBuf::from("."));
    }

    #[test]
    fn should_read_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("autovet.toml");
        std::fs::write(&path, "[scan]\nroot = 'automations'\n").unwrap();
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.scan.root, PathBuf::from("automations"));
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("autovet.toml");
        std::fs::write(&path, "invalid {{{").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn should_reject_empty_extensions() {
        let mut config = Config::default();
        config.scan.extensions.clear();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_reject_dotted_extensions() {
        let mut config = Config::default();
        config.scan.extensions = vec![".yaml".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_default_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_split_comma_separated_extensions() {
        assert_eq!(split_extensions("yaml, yml,,json "), ["yaml", "yml", "json"]);
        assert!(split_extensions(" , ").is_empty());
    }

    #[test]
    fn should_override_root() {
        let mut config = Config::default();
        config.override_root(PathBuf::from("/srv/ha"));
        assert_eq!(config.scan.root, PathBuf::from("/srv/ha"));
    }
}
