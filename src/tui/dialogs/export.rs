//! Export dialog
//!
//! Asks for a path and writes the printable document there.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render the export dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(70, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Export Document ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Path
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Summary
            Constraint::Min(0),
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let path_input = app
        .export_path
        .clone()
        .label("Path")
        .label_width(6)
        .focused(true);
    frame.render_widget(path_input, chunks[0]);

    let summary = app.report().summary_line();
    frame.render_widget(
        Paragraph::new(summary).style(Style::default().fg(Color::Gray)),
        chunks[2],
    );

    let hints = Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(" Export  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[4]);
}
