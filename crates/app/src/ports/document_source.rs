//! Document source port — where automation documents come from.

use std::future::Future;
use std::path::PathBuf;

use autovet_domain::error::AutovetError;
use serde_json::Value;

/// Opaque handle naming one document of a [`DocumentSource`].
///
/// The location is shown to users as-is. Filesystem sources also keep the
/// exact path, since a lossy display string cannot always be turned back
/// into the file it came from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentRef {
    pub location: String,
    pub path: Option<PathBuf>,
}

impl DocumentRef {
    #[must_use]
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            path: None,
        }
    }

    /// Reference a file, displayed with its lossy UTF-8 rendering.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            location: path.to_string_lossy().into_owned(),
            path: Some(path),
        }
    }
}

impl std::fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.location)
    }
}

/// A collection of automation documents, parsed into value trees.
pub trait DocumentSource {
    /// List every document, in a stable order.
    fn list(&self) -> impl Future<Output = Result<Vec<DocumentRef>, AutovetError>> + Send;

    /// Load and parse a single document.
    fn load(
        &self,
        document: &DocumentRef,
    ) -> impl Future<Output = Result<Value, AutovetError>> + Send;
}
