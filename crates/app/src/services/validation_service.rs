//! Validation service — check every automation document a source provides.

use autovet_domain::automation;
use autovet_domain::error::AutovetError;
use serde_json::Value;

use crate::ports::DocumentSource;
use crate::report::{DocumentOutcome, ReportEntry, ScanReport, error_chain};

/// Classify and validate a single parsed document.
///
/// Documents that are not mappings, or that have neither `trigger` nor
/// `id`, are not automations and are skipped rather than rejected.
#[must_use]
pub fn check_document(document: &Value) -> DocumentOutcome {
    let Some(mapping) = document.as_object() else {
        return DocumentOutcome::Skipped;
    };
    if !mapping.contains_key("trigger") && !mapping.contains_key("id") {
        return DocumentOutcome::Skipped;
    }

    let (is_valid, errors) = automation::validate(document).into_parts();
    if is_valid {
        DocumentOutcome::Valid {
            summary: automation::summarize(document),
        }
    } else {
        DocumentOutcome::Invalid { errors }
    }
}

/// Application service validating the documents of a [`DocumentSource`].
pub struct ValidationService<S> {
    source: S,
}

impl<S: DocumentSource> ValidationService<S> {
    /// Create a new service reading from the given source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Validate every document of the source.
    ///
    /// A document that fails to load is recorded as
    /// [`DocumentOutcome::LoadFailed`] and the scan moves on.
    ///
    /// # Errors
    ///
    /// Returns the source's error when the documents cannot be listed.
    #[tracing::instrument(skip(self))]
    pub async fn scan(&self) -> Result<ScanReport, AutovetError> {
        let started_at = autovet_domain::time::now();
        let documents = self.source.list().await?;
        tracing::info!(count = documents.len(), "found documents");

        let mut entries = Vec::with_capacity(documents.len());
        for document in documents {
            let outcome = match self.source.load(&document).await {
                Ok(value) => check_document(&value),
                Err(err) => DocumentOutcome::LoadFailed {
                    reason: error_chain(&err),
                },
            };

            match &outcome {
                DocumentOutcome::Valid { .. } => {
                    tracing::debug!(document = %document, "valid automation");
                }
                DocumentOutcome::Invalid { errors } => {
                    tracing::warn!(
                        document = %document,
                        errors = errors.len(),
                        "invalid automation"
                    );
                }
                DocumentOutcome::Skipped => {
                    tracing::debug!(document = %document, "skipped, not an automation");
                }
                DocumentOutcome::LoadFailed { reason } => {
                    tracing::warn!(document = %document, %reason, "failed to load document");
                }
            }

            entries.push(ReportEntry { document, outcome });
        }

        let report = ScanReport {
            started_at,
            entries,
        };
        tracing::info!(
            valid = report.valid_count(),
            invalid = report.invalid_count(),
            skipped = report.skipped_count(),
            "scan complete"
        );
        Ok(report)
    }
}
