//! Path management for roi-calc
//!
//! ## Path Resolution Order
//!
//! 1. `ROI_CALC_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `roi-calc` (e.g. `~/.config/roi-calc`)
//!
//! Nothing about a worksheet is stored here; the directory only holds the
//! settings file and the TUI log.

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::RoiError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "ROI_CALC_DATA_DIR";

/// Manages all paths used by roi-calc
#[derive(Debug, Clone)]
pub struct RoiPaths {
    /// Base directory for settings and logs
    base_dir: PathBuf,
}

impl RoiPaths {
    /// Create a new RoiPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, RoiError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create RoiPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the TUI log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("roi.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), RoiError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| RoiError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, RoiError> {
    ProjectDirs::from("", "", "roi-calc")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| RoiError::Config("Could not determine a config directory".into()))
}
