//! Comparison view
//!
//! Current cost against savings, monthly and yearly. Savings turn green when
//! the plan pays off and red when it costs more.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::display::format_usd;
use crate::models::MetricSection;
use crate::tui::app::App;
use crate::tui::layout::columns;
use crate::tui::widgets::Stat;

/// Render the comparison strip
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", MetricSection::Comparison.title()))
        .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let entries: Vec<_> = app
        .metrics
        .entries()
        .into_iter()
        .filter(|(section, _, _)| *section == MetricSection::Comparison)
        .collect();

    for ((_, label, value), cell) in entries.iter().zip(columns(inner, entries.len())) {
        let mut stat = Stat::new(*label, format_usd(*value, &app.settings.currency_symbol));
        if label.starts_with("Savings") {
            stat = stat.emphasis(savings_color(*value));
        }
        frame.render_widget(stat, cell);
    }
}

fn savings_color(value: f64) -> Color {
    if value > 0.0 {
        Color::Green
    } else if value < 0.0 {
        Color::Red
    } else {
        Color::White
    }
}
