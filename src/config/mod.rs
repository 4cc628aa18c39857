//! Configuration module for roi-calc
//!
//! - Base directory resolution
//! - User settings persistence (display and export preferences only)

pub mod paths;
pub mod settings;

pub use paths::RoiPaths;
pub use settings::Settings;
