//! [`DocumentSource`] implementation backed by a directory tree.

use std::future::Future;
use std::path::{Path, PathBuf};

use autovet_app::ports::{DocumentRef, DocumentSource};
use autovet_domain::error::AutovetError;
use serde_json::Value;

use crate::error::YamlFsError;
use crate::parser::parse_document;

/// File extensions picked up when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// Reads automation documents from files under a root directory.
///
/// The root is walked recursively and every regular file with a matching
/// extension is a document, including symlinks to files. Symlinked
/// directories are not descended into. A root that is itself a file is the
/// only document, whatever its extension.
#[derive(Debug, Clone)]
pub struct YamlFsSource {
    root: PathBuf,
    extensions: Vec<String>,
}

impl YamlFsSource {
    /// Create a source rooted at `root` using [`DEFAULT_EXTENSIONS`].
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
        }
    }

    /// Replace the set of file extensions to pick up (without the dot).
    #[must_use]
    pub fn with_extensions<I, E>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|wanted| wanted == ext))
    }

    fn discover(&self) -> Result<Vec<PathBuf>, YamlFsError> {
        if !self.root.exists() {
            return Err(YamlFsError::RootNotFound(self.root.clone()));
        }
        if self.root.is_file() {
            return Ok(vec![self.root.clone()]);
        }

        let mut files = Vec::new();
        for entry in walkdir::WalkDir::new(&self.root).follow_links(false) {
            let entry = entry?;
            if !self.matches_extension(entry.path()) {
                continue;
            }
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if is_file {
                files.push(entry.into_path());
            } else {
                tracing::debug!(path = %entry.path().display(), "skipping non-file entry");
            }
        }
        files.sort_by(|a, b| {
            a.to_string_lossy()
                .cmp(&b.to_string_lossy())
                .then_with(|| a.cmp(b))
        });
        Ok(files)
    }
}

async fn read_document(path: PathBuf) -> Result<Value, YamlFsError> {
    let content = tokio::fs::read_to_string(&path).await?;
    let extension = path.extension().and_then(|ext| ext.to_str());
    parse_document(extension, &content)
}

impl DocumentSource for YamlFsSource {
    fn list(&self) -> impl Future<Output = Result<Vec<DocumentRef>, AutovetError>> + Send {
        tracing::debug!(root = %self.root.display(), "discovering documents");
        let result: Result<Vec<DocumentRef>, AutovetError> = self
            .discover()
            .map(|paths| {
                paths.into_iter().map(DocumentRef::from_path).collect()
            })
            .map_err(AutovetError::from);
        async { result }
    }

    fn load(
        &self,
        document: &DocumentRef,
    ) -> impl Future<Output = Result<Value, AutovetError>> + Send {
        let path = document
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(&document.location));
        async move {
            tracing::trace!(path = %path.display(), "reading document");
            read_document(path).await.map_err(AutovetError::from)
        }
    }
}
