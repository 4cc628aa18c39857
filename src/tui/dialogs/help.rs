//! Help dialog
//!
//! Lists the keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section_line("Keyboard Shortcuts"),
        Line::from(""),
        key_line("Tab / Down", "Next field"),
        key_line("S-Tab / Up", "Previous field"),
        key_line("Enter", "Next field (new bullet in notes)"),
        key_line("Left/Right", "Move cursor, or switch plan"),
        key_line("Space", "Switch plan on the plan field"),
        key_line("Ctrl+E", "Export document"),
        key_line("Ctrl+P", "Print"),
        key_line("F1", "Show this help"),
        key_line("Esc / Ctrl+C", "Quit"),
        Line::from(""),
        section_line("Entering numbers"),
        Line::from(""),
        Line::from("  Type amounts as you would write them: $4,000 or 12.5."),
        Line::from("  Anything that is not a number counts as zero."),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ]
}

fn section_line(title: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title.to_string(),
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>14}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
