//! CSV Export functionality
//!
//! One row per derived metric, spreadsheet-compatible.

use crate::error::RoiResult;
use crate::models::Worksheet;
use std::io::Write;

/// Export a worksheet's derived metrics to CSV
pub fn export_metrics_csv<W: Write>(worksheet: &Worksheet, writer: W) -> RoiResult<()> {
    let metrics = worksheet.metrics();
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["Section", "Metric", "Value"])?;
    let plan = worksheet.inputs.plan.to_string();
    csv_writer.write_record(["Plan", "Selected plan", plan.as_str()])?;

    for (section, label, value) in metrics.entries() {
        let value = format!("{:.2}", if value.is_finite() { value } else { 0.0 });
        csv_writer.write_record([section.title(), label, value.as_str()])?;
    }

    csv_writer.flush()?;
    Ok(())
}
