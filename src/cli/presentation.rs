//! Report presentation: text (comfy-table) and JSON.

use crate::error::ApiError;
use crate::scan::ScanReport;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::path::Path;

/// Format a section heading, bold and underlined when `color` is set.
fn format_section_heading(title: &str, color: bool) -> String {
    if color {
        format!("{}", title.bold().underline())
    } else {
        title.to_string()
    }
}

/// Path relative to the scan root, for compact tables.
fn display_path(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}

pub fn format_report_text(report: &ScanReport, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading("Scan", color)
    ));
    out.push_str(&format!("  Root: {}\n", report.root.display()));
    out.push_str(&format!(
        "  Items: {} ({} files, {} folders)\n",
        report.item_count, report.file_count, report.folder_count
    ));
    out.push_str(&format!(
        "  Hash: {} (children in {:?} order)\n",
        report.provider, report.child_order
    ));
    let root_fp = if report.root_fingerprint.is_empty() {
        "(empty)"
    } else {
        report.root_fingerprint.as_str()
    };
    out.push_str(&format!("  Root fingerprint: {}\n\n", root_fp));

    out.push_str(&format!(
        "{}\n\n",
        format_section_heading("Duplicate folders", color)
    ));
    if report.duplicates.is_empty() {
        out.push_str("No duplicate folders found.\n");
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Duplicate", "Same as", "Fingerprint"]);
        for dup in &report.duplicates {
            let fp = if dup.fingerprint.is_empty() {
                "(empty)".to_string()
            } else {
                dup.fingerprint.short().to_string()
            };
            table.add_row(vec![
                display_path(&dup.path, &report.root),
                display_path(&dup.original, &report.root),
                fp,
            ]);
        }
        out.push_str(&format!("{}\n\n", table));
        out.push_str(&format!(
            "Total: {} duplicate folders.\n",
            report.duplicates.len()
        ));
    }

    if let Some(removal) = &report.removal {
        out.push_str(&format!(
            "\n{}\n\n",
            format_section_heading("Removal", color)
        ));
        for path in &removal.removed {
            out.push_str(&format!("  removed: {}\n", path.display()));
        }
        for path in &removal.skipped {
            out.push_str(&format!("  skipped: {}\n", path.display()));
        }
        out.push_str(&format!(
            "Removed {} folders ({:?}), skipped {}.\n",
            removal.removed.len(),
            removal.mode,
            removal.skipped.len()
        ));
    }

    out
}

pub fn format_report_json(report: &ScanReport) -> Result<String, ApiError> {
    serde_json::to_string_pretty(report).map_err(|e| ApiError::OutputError(e.to_string()))
}

/// Render the report in the requested format ("text" or "json").
pub fn format_report(report: &ScanReport, format: &str, color: bool) -> Result<String, ApiError> {
    match format {
        "json" => format_report_json(report),
        "text" => Ok(format_report_text(report, color)),
        other => Err(ApiError::OutputError(format!(
            "Invalid output format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}
