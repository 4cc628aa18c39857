//! Stat widget
//!
//! A bordered box with a small label and a large formatted amount.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// One labelled figure
#[derive(Debug, Clone)]
pub struct Stat {
    label: String,
    value: String,
    emphasis: Option<Color>,
}

impl Stat {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            emphasis: None,
        }
    }

    /// Draw the value in the given color
    pub fn emphasis(mut self, color: Color) -> Self {
        self.emphasis = Some(color);
        self
    }
}

impl Widget for Stat {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Line::styled(
                format!(" {} ", self.label),
                Style::default().fg(Color::Gray),
            ));

        let value_style = Style::default()
            .fg(self.emphasis.unwrap_or(Color::White))
            .add_modifier(Modifier::BOLD);

        Paragraph::new(Line::styled(self.value, value_style))
            .alignment(Alignment::Right)
            .block(block)
            .render(area, buf);
    }
}
