//! roi-calc - ROI comparison calculator for carrier driver-recruiting plans
//!
//! A carrier enters its fleet and marketing figures plus the parameters of
//! one pricing plan (DFY monthly, or DWY one-time), and the crate derives a
//! before/after cost comparison.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `normalize`: Lenient text-to-number conversion for form fields
//! - `engine`: Pure derivation of the comparison metrics
//! - `models`: Raw and normalized inputs, plans, metrics, worksheets
//! - `config`: Base directory and settings
//! - `error`: Custom error types
//! - `logging`: tracing subscriber setup
//! - `display`: Currency and terminal formatting
//! - `reports`: The ROI report assembled for output
//! - `export`: Document, JSON, YAML and CSV exports, and printing
//! - `cli`: Command handlers for the `roi` binary
//! - `tui`: Interactive calculator form
//!
//! # Example
//!
//! ```rust
//! use roi_calc::models::{InputField, PlanKind, RawInputs};
//!
//! let mut inputs = RawInputs::default();
//! inputs.plan = PlanKind::Dfy;
//! inputs.set(InputField::DfyMonthly, "$1,000");
//! inputs.set(InputField::DriversNeededMonthly, "5");
//! inputs.set(InputField::CiAdMonthly, "200");
//!
//! let metrics = roi_calc::engine::derive(&inputs.normalized());
//! assert_eq!(metrics.with_yearly_total, 24000.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod normalize;
pub mod reports;
pub mod tui;

pub use error::{RoiError, RoiResult};
