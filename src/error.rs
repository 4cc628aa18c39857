//! Custom error types for roi-calc
//!
//! The calculation core never fails: normalization and derivation are total.
//! These errors cover the shell around it (configuration, worksheet files,
//! exports, printing and the terminal UI).

use thiserror::Error;

/// The main error type for roi-calc operations
#[derive(Error, Debug)]
pub enum RoiError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV writer errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Invalid command-line or worksheet-file usage
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Print spooler errors
    #[error("Print error: {0}")]
    Print(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl RoiError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for RoiError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RoiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for RoiError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for RoiError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for roi-calc operations
pub type RoiResult<T> = Result<T, RoiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RoiError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_validation_error() {
        let err = RoiError::Validation("unsupported worksheet extension".into());
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation error: unsupported worksheet extension"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let roi_err: RoiError = io_err.into();
        assert!(matches!(roi_err, RoiError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let roi_err: RoiError = json_err.into();
        assert!(matches!(roi_err, RoiError::Json(_)));
    }
}
