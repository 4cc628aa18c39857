//! Terminal User Interface module
//!
//! An interactive calculator form built on ratatui. Figures update on every
//! keystroke; the document can be exported or printed without leaving it.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
