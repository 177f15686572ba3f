//! Scan report — the result of validating every document of a source.

use autovet_domain::time::Timestamp;

use crate::ports::DocumentRef;

/// What happened to a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    /// The document is a valid automation.
    Valid { summary: String },
    /// The document is an automation with problems.
    Invalid { errors: Vec<String> },
    /// The document is not an automation (not a mapping, or neither
    /// `trigger` nor `id` is present).
    Skipped,
    /// The document could not be read or parsed.
    LoadFailed { reason: String },
}

impl DocumentOutcome {
    /// Whether this outcome should fail a scan.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Invalid { .. } | Self::LoadFailed { .. })
    }
}

/// One line of a [`ScanReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub document: DocumentRef,
    pub outcome: DocumentOutcome,
}

/// Outcomes of a whole scan, in source order.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub started_at: Timestamp,
    pub entries: Vec<ReportEntry>,
}

impl ScanReport {
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.count(|outcome| matches!(outcome, DocumentOutcome::Valid { .. }))
    }

    /// Documents that failed validation or could not be loaded.
    #[must_use]
    pub fn invalid_count(&self) -> usize {
        self.count(DocumentOutcome::is_failure)
    }

    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.count(|outcome| matches!(outcome, DocumentOutcome::Skipped))
    }

    /// `true` when no document failed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.invalid_count() == 0
    }

    fn count(&self, predicate: impl Fn(&DocumentOutcome) -> bool) -> usize {
        self.entries
            .iter()
            .filter(|entry| predicate(&entry.outcome))
            .count()
    }
}

/// Render an error and all of its sources as `outer: inner: root`.
#[must_use]
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
