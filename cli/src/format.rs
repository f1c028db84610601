//! Output formatting utilities for the CLI.

use crate::dto::DtoReport;

/// Human-readable summary lines for a generation run.
pub fn format_report(report: &DtoReport) -> Vec<String> {
    let mut lines = Vec::new();
    if !report.written.is_empty() {
        lines.push(format!("Added: {}", report.written.join(", ")));
    }
    if !report.unchanged.is_empty() {
        lines.push(format!("Already present: {}", report.unchanged.join(", ")));
    }
    if !report.skipped.is_empty() {
        lines.push(format!("Skipped identifiers: {}", report.skipped.join(", ")));
    }
    if report.assertions_imported {
        lines.push("Imported assertion annotations.".to_string());
        lines.push(
            "Consider removing them from the entity or keep them updated in both places."
                .to_string(),
        );
    }
    lines
}
