//! Filesystem adapter error types.

use std::path::PathBuf;

use autovet_domain::error::AutovetError;

/// Errors specific to the filesystem adapter.
#[derive(Debug, thiserror::Error)]
pub enum YamlFsError {
    /// The configured root does not exist.
    #[error("root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// Walking the directory tree failed.
    #[error("failed to walk directory")]
    Walk(#[from] walkdir::Error),

    /// Reading a file failed.
    #[error("failed to read file")]
    Io(#[from] std::io::Error),

    /// The file is not valid YAML.
    #[error("failed to parse YAML")]
    Yaml(#[from] serde_yaml::Error),

    /// The file is not valid JSON.
    #[error("failed to parse JSON")]
    Json(#[from] serde_json::Error),

    /// A YAML mapping key cannot be represented as a string.
    #[error("unsupported mapping key: {0}")]
    UnsupportedKey(String),

    /// A YAML float has no JSON representation (NaN, infinity).
    #[error("unsupported number: {0}")]
    UnsupportedNumber(String),
}

impl From<YamlFsError> for AutovetError {
    fn from(err: YamlFsError) -> Self {
        Self::Source(Box::new(err))
    }
}
