//! YAML Export functionality
//!
//! Human-readable worksheet export. The `worksheet` section can be copied
//! into a file and passed back to `roi calc --from`.

use crate::error::{RoiError, RoiResult};
use crate::export::json::RoiExport;
use crate::models::Worksheet;
use std::io::Write;

/// Export a worksheet to YAML format
pub fn export_yaml<W: Write>(worksheet: &Worksheet, writer: &mut W) -> RoiResult<()> {
    let export = RoiExport::from_worksheet(worksheet);

    writeln!(writer, "# ROI Calculator Worksheet Export")
        .map_err(|e| RoiError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| RoiError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| RoiError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| RoiError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| RoiError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a YAML export
pub fn import_from_yaml(yaml_str: &str) -> RoiResult<RoiExport> {
    let export: RoiExport =
        serde_yaml::from_str(yaml_str).map_err(|e| RoiError::Export(e.to_string()))?;

    export.validate().map_err(RoiError::Export)?;

    Ok(export)
}
