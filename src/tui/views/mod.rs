//! TUI Views module
//!
//! The calculator screen: header form, input panels, comparison, notes and
//! the status bar, with any open dialog drawn on top.

pub mod comparison;
pub mod form;
pub mod notes;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    form::render_header(frame, app, layout.header);
    form::render_current(frame, app, layout.current);
    form::render_plan(frame, app, layout.plan);
    comparison::render(frame, app, layout.comparison);
    notes::render(frame, app, layout.notes);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::Export => dialogs::export::render(frame, app),
        ActiveDialog::None => {}
    }
}
