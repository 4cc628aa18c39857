//! CLI command handlers
//!
//! Bridges clap argument parsing with the report and export layers.

pub mod calc;
pub mod export;
pub mod worksheet;

pub use calc::{handle_calc_command, CalcArgs};
pub use export::{
    handle_export_command, handle_template_command, ExportArgs, ExportFormat, TemplateFormat,
};
pub use worksheet::WorksheetArgs;
