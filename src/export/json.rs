//! JSON Export functionality
//!
//! Exports a worksheet and its derived metrics with schema versioning.

use crate::error::{RoiError, RoiResult};
use crate::models::{DerivedMetrics, Worksheet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Worksheet export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// The worksheet exactly as entered
    pub worksheet: Worksheet,

    /// Metrics derived from the worksheet
    pub metrics: DerivedMetrics,
}

impl RoiExport {
    /// Create an export, recomputing the metrics from the worksheet
    pub fn from_worksheet(worksheet: &Worksheet) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            worksheet: worksheet.clone(),
            metrics: finite_metrics(worksheet.metrics()),
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let recomputed = finite_metrics(self.worksheet.metrics());
        if recomputed != self.metrics {
            return Err("Metrics do not match the worksheet inputs".to_string());
        }

        Ok(())
    }
}

/// JSON has no NaN/Infinity; exported metrics use the display policy of
/// rendering non-finite values as zero
fn finite_metrics(metrics: DerivedMetrics) -> DerivedMetrics {
    let f = |v: f64| if v.is_finite() { v } else { 0.0 };
    DerivedMetrics {
        lost_revenue_monthly: f(metrics.lost_revenue_monthly),
        current_monthly_total: f(metrics.current_monthly_total),
        current_yearly_total: f(metrics.current_yearly_total),
        monthly_plan_fee: f(metrics.monthly_plan_fee),
        monthly_ad_spend: f(metrics.monthly_ad_spend),
        with_monthly_cost: f(metrics.with_monthly_cost),
        with_yearly_total: f(metrics.with_yearly_total),
        current_monthly_cost: f(metrics.current_monthly_cost),
        monthly_savings: f(metrics.monthly_savings),
        yearly_savings: f(metrics.yearly_savings),
    }
}

/// Export a worksheet to JSON
pub fn export_json<W: Write>(worksheet: &Worksheet, writer: &mut W, pretty: bool) -> RoiResult<()> {
    let export = RoiExport::from_worksheet(worksheet);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| RoiError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a JSON export (for verification)
pub fn import_from_json(json_str: &str) -> RoiResult<RoiExport> {
    let export: RoiExport =
        serde_json::from_str(json_str).map_err(|e| RoiError::Export(e.to_string()))?;

    export.validate().map_err(RoiError::Export)?;

    Ok(export)
}
