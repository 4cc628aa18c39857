//! Notes view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, FormField};

/// Render the notes box
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused == FormField::Notes;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Notes ")
        .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let (text, style) = if focused {
        (app.editor.with_cursor_marker('▏'), Style::default().fg(Color::White))
    } else if app.worksheet.notes_text().is_none() {
        (
            "Add notes or assumptions here...".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (app.worksheet.notes.clone(), Style::default().fg(Color::Yellow))
    };

    // Keep the cursor line in view
    let inner_height = area.height.saturating_sub(2);
    let line_count = text.lines().count() as u16;
    let scroll = line_count.saturating_sub(inner_height);

    let paragraph = Paragraph::new(text)
        .style(style)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}
