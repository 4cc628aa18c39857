//! Export module for roi-calc
//!
//! - Document: printable plain-text report (optionally sent to the printer)
//! - JSON: machine-readable worksheet + metrics
//! - YAML: human-readable worksheet + metrics
//! - CSV: derived metrics only (spreadsheet-compatible)

pub mod csv;
pub mod document;
pub mod json;
pub mod print;
pub mod yaml;

pub use self::csv::export_metrics_csv;
pub use document::{render_document, write_document};
pub use json::{export_json, import_from_json, RoiExport, EXPORT_SCHEMA_VERSION};
pub use print::send_to_printer;
pub use yaml::{export_yaml, import_from_yaml};
