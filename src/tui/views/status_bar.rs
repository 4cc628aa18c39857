//! Status bar view
//!
//! Shows the selected plan, yearly savings, the latest notice, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::display::format_usd;
use crate::tui::app::App;

const HINTS: &str = " Tab:Next  ^E:Export  ^P:Print  F1:Help  Esc:Quit ";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let savings = app.metrics.yearly_savings;
    let savings_color = if app.metrics.is_saving() {
        Color::Green
    } else if savings < 0.0 {
        Color::Red
    } else {
        Color::Yellow
    };

    let mut spans = vec![
        Span::styled(" Plan: ", Style::default().fg(Color::White)),
        Span::styled(
            app.plan().label(),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" │ "),
        Span::styled("Savings / yr.: ", Style::default().fg(Color::White)),
        Span::styled(
            format_usd(savings, &app.settings.currency_symbol),
            Style::default().fg(savings_color).add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(ref notification) = app.notification {
        let color = notification.notification_type.color();
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!(
                "{} {}",
                notification.notification_type.icon(),
                notification.message
            ),
            Style::default().fg(color),
        ));
    }

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + HINTS.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(HINTS, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
