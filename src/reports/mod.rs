//! Reports module for roi-calc
//!
//! The ROI comparison report shared by the CLI, the TUI export dialog and
//! the file exports.

pub mod roi;

pub use roi::{echo, ComparisonRow, InputEcho, RoiReport, REPORT_WIDTH};
