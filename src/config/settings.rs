//! User settings for roi-calc
//!
//! Display and export preferences. Worksheet values are never stored here.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use std::fmt::Write;
use serde::{Deserialize, Serialize};

use super::paths::RoiPaths;
use crate::error::RoiError;

/// User settings for roi-calc
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format used for a blank worksheet date (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Brand shown in report titles and the document footer
    #[serde(default = "default_brand_name")]
    pub brand_name: String,

    /// Command that receives the exported document path for printing
    #[serde(default = "default_print_command")]
    pub print_command: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_brand_name() -> String {
    "Carrier Intelligence".to_string()
}

fn default_print_command() -> String {
    "lp".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            brand_name: default_brand_name(),
            print_command: default_print_command(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &RoiPaths) -> Result<Self, RoiError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| RoiError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| RoiError::Config(format!("Failed to parse settings file: {}", e)))?;
            settings.validate()?;

            tracing::debug!(path = %settings_path.display(), "loaded settings");
            Ok(settings)
        } else {
            // Don't save yet - `config init` decides when to persist
            Ok(Settings::default())
        }
    }

    /// Reject values that would fail at display time
    pub fn validate(&self) -> Result<(), RoiError> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(RoiError::Config(format!(
                "Invalid date_format '{}' in settings file",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Format a date with `date_format`, falling back to the default format
    pub fn format_date(&self, date: NaiveDate) -> String {
        let mut formatted = String::new();
        if write!(formatted, "{}", date.format(&self.date_format)).is_err() {
            formatted.clear();
            let _ = write!(formatted, "{}", date.format(DEFAULT_DATE_FORMAT));
        }
        formatted
    }

    /// Save settings to disk
    pub fn save(&self, paths: &RoiPaths) -> Result<(), RoiError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| RoiError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| RoiError::Io(format!("Failed to write settings file: {}", e)))?;

        tracing::info!(path = %settings_path.display(), "saved settings");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.brand_name, "Carrier Intelligence");
        assert_eq!(settings.print_command, "lp");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RoiPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.date_format, "%m/%d/%Y");
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RoiPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "€".into();
        settings.print_command = "lpr".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.print_command, "lpr");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RoiPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"brand_name": "Acme"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.brand_name, "Acme");
        assert_eq!(loaded.currency_symbol, "$");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RoiPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, RoiError::Config(_)));
    }

    #[test]
    fn test_invalid_date_format_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RoiPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Q"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, RoiError::Config(_)));
        assert!(err.to_string().contains("%Q"));
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let mut settings = Settings::default();
        assert_eq!(settings.format_date(date), "03/09/2024");

        settings.date_format = "%Q".into();
        assert_eq!(settings.format_date(date), "03/09/2024");
    }

    #[test]
    fn test_custom_date_format_loads() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RoiPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Y-%m-%d"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.date_format, "%Y-%m-%d");
    }
}
