//! Core data models for roi-calc
//!
//! Raw form inputs, the normalized plan union, derived metrics and the
//! worksheet that ties them together.

pub mod inputs;
pub mod metrics;
pub mod plan;
pub mod worksheet;

pub use inputs::{InputField, NormalizedInputs, RawInputs, DEFAULT_AMORTIZATION_MONTHS};
pub use metrics::{DerivedMetrics, MetricSection};
pub use plan::{Plan, PlanKind};
pub use worksheet::{Worksheet, DEFAULT_NOTES};
