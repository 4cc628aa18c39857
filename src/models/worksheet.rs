//! Worksheet: one filled-in calculator form
//!
//! Header details, raw inputs and free-text notes. A worksheet can be read
//! from a JSON or YAML file so the CLI can be driven without flags.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::inputs::RawInputs;
use super::metrics::DerivedMetrics;
use crate::error::{RoiError, RoiResult};

/// Notes start with one empty bullet
pub const DEFAULT_NOTES: &str = "• ";

/// A calculator worksheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Worksheet {
    pub company_name: String,
    pub representative: String,
    /// Free text; blank means "today" when rendered
    pub date: String,
    pub inputs: RawInputs,
    pub notes: String,
}

impl Default for Worksheet {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            representative: String::new(),
            date: String::new(),
            inputs: RawInputs::default(),
            notes: DEFAULT_NOTES.to_string(),
        }
    }
}

impl Worksheet {
    /// Recompute the metrics for the current inputs
    pub fn metrics(&self) -> DerivedMetrics {
        self.inputs.derive()
    }

    /// Notes with the untouched placeholder bullet treated as empty
    pub fn notes_text(&self) -> Option<&str> {
        let trimmed = self.notes.trim();
        if trimmed.is_empty() || trimmed == DEFAULT_NOTES.trim() {
            None
        } else {
            Some(self.notes.trim_end())
        }
    }

    /// Load a worksheet from a `.json`, `.yaml` or `.yml` file
    pub fn load(path: &Path) -> RoiResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            RoiError::Io(format!("Failed to read worksheet {}: {}", path.display(), e))
        })?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let worksheet: Worksheet = match extension.as_deref() {
            Some("json") => serde_json::from_str(&contents)?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&contents)?,
            _ => {
                return Err(RoiError::Validation(format!(
                    "Unsupported worksheet file '{}': use .json, .yaml or .yml",
                    path.display()
                )))
            }
        };

        tracing::debug!(path = %path.display(), "loaded worksheet");
        Ok(worksheet)
    }
}
