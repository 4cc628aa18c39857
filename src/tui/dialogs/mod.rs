//! Dialog modules for the TUI

pub mod export;
pub mod help;
