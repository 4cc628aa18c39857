//! Printable document export
//!
//! A plain-text rendering of the ROI report with a footer, suitable for
//! printing or saving alongside a proposal.

use chrono::{Datelike, Local};
use std::path::{Path, PathBuf};

use crate::error::{RoiError, RoiResult};
use crate::reports::{RoiReport, REPORT_WIDTH};

/// Render the printable document for a report
pub fn render_document(report: &RoiReport) -> String {
    render_document_for_year(report, Local::now().year())
}

/// Render the printable document with an explicit footer year
pub fn render_document_for_year(report: &RoiReport, year: i32) -> String {
    let mut output = report.format_terminal();
    output.push('\n');
    output.push_str(&"-".repeat(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format!("© {} {} — ROI Calculator\n", year, report.brand));
    output
}

/// Write the printable document to `path`, creating parent directories
pub fn write_document(report: &RoiReport, path: &Path) -> RoiResult<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            RoiError::Export(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    std::fs::write(path, render_document(report))
        .map_err(|e| RoiError::Export(format!("Failed to write {}: {}", path.display(), e)))?;

    tracing::info!(path = %path.display(), "wrote ROI document");
    Ok(path.to_path_buf())
}
