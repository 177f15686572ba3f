//! Human-readable rendering of a scan report.

use autovet_app::report::{DocumentOutcome, ScanReport};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Render one block per document followed by the totals.
#[must_use]
pub fn render_report(report: &ScanReport) -> String {
    let mut lines = Vec::new();

    for entry in &report.entries {
        lines.push(format!("\n📄 Validating: {}", entry.document));
        match &entry.outcome {
            DocumentOutcome::Valid { summary } => {
                lines.push(format!("   ✅ Valid - {summary}"));
            }
            DocumentOutcome::Invalid { errors } => {
                lines.push(format!("   ❌ Invalid - {} error(s):", errors.len()));
                lines.extend(errors.iter().map(|error| format!("      - {error}")));
            }
            DocumentOutcome::Skipped => {
                lines.push("   ⏩ Skipping - not an automation file".to_string());
            }
            DocumentOutcome::LoadFailed { reason } => {
                lines.push(format!("   ❌ Failed to load: {reason}"));
            }
        }
    }

    lines.push("\n📈 Summary:".to_string());
    lines.push(format!(
        "   🕒 Scanned at: {}",
        report.started_at.format(TIMESTAMP_FORMAT)
    ));
    lines.push(format!("   ✅ Valid automations: {}", report.valid_count()));
    lines.push(format!("   ❌ Invalid automations: {}", report.invalid_count()));
    lines.push(format!(
        "   ⏩ Skipped (not automations): {}",
        report.skipped_count()
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
