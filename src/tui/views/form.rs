//! Form views
//!
//! Header details plus the two input panels. Each panel ends with the stats
//! for its section of the metrics.

use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::{format_count, format_usd};
use crate::models::{InputField, MetricSection, PlanKind};
use crate::tui::app::{App, FormField};
use crate::tui::layout::{columns, PanelLayout};
use crate::tui::widgets::{Stat, TextInput};

const LABEL_WIDTH: u16 = 30;

/// Build the input widget for a field, using the live editor when focused
fn field_input(app: &App, field: FormField, placeholder: &str) -> TextInput {
    let focused = app.focused == field;
    let mut input = if focused {
        app.editor.clone()
    } else {
        TextInput::new().content(app.field_text(field).unwrap_or_default())
    };

    input = input
        .label(field.label())
        .label_width(LABEL_WIDTH)
        .placeholder(placeholder)
        .focused(focused);

    if let FormField::Input(input_field) = field {
        if input_field.is_currency() {
            input = input.suffix(app.settings.currency_symbol.clone());
        } else if let Some(hint) = app
            .worksheet
            .inputs
            .normalized()
            .count(input_field)
            .and_then(|counted| count_hint(app.worksheet.inputs.get(input_field), counted))
        {
            input = input.suffix(hint);
        } else if input_field == InputField::DwyAmortizationMonths {
            input = input.suffix("mo.");
        }
    }
    input
}

/// `= 3` when a count field's text is not already the number it counts as
fn count_hint(raw: &str, counted: f64) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let counted = format_count(counted);
    (counted != raw).then(|| format!("= {}", counted))
}

fn panel_block(title: &str, active: bool) -> Block<'static> {
    let border_color = if active { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
}

fn render_stats(frame: &mut Frame, app: &App, section: MetricSection, area: Rect) {
    let entries: Vec<_> = app
        .metrics
        .entries()
        .into_iter()
        .filter(|(s, _, _)| *s == section)
        .collect();

    for ((_, label, value), cell) in entries.iter().zip(columns(area, entries.len())) {
        let stat = Stat::new(*label, format_usd(*value, &app.settings.currency_symbol));
        frame.render_widget(stat, cell);
    }
}

/// Company, representative and date
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!("{} ROI Calculator", app.settings.brand_name);
    let block = panel_block(&title, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let today = app.settings.format_date(Local::now().date_naive());
    let rows = [
        (FormField::CompanyName, "Company name"),
        (FormField::Representative, "Your name"),
        (FormField::Date, today.as_str()),
    ];

    for (i, (field, placeholder)) in rows.iter().enumerate() {
        if (i as u16) >= inner.height {
            break;
        }
        let row = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
        frame.render_widget(field_input(app, *field, placeholder), row);
    }
}

/// Current situation inputs and stats
pub fn render_current(frame: &mut Frame, app: &App, area: Rect) {
    let active = InputField::CURRENT
        .iter()
        .any(|f| app.focused == FormField::Input(*f));
    let block = panel_block("Current situation", active);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = PanelLayout::new(inner, InputField::CURRENT.len());
    for (field, row) in InputField::CURRENT.iter().zip(layout.fields) {
        frame.render_widget(field_input(app, FormField::Input(*field), "0"), row);
    }
    render_stats(frame, app, MetricSection::Current, layout.stats);
}

/// Plan selector, plan inputs and stats
pub fn render_plan(frame: &mut Frame, app: &App, area: Rect) {
    let plan = app.plan();
    let fields: Vec<InputField> = InputField::PLAN
        .iter()
        .copied()
        .filter(|f| f.applies_to(plan))
        .collect();

    let active = app.focused == FormField::Plan
        || fields.iter().any(|f| app.focused == FormField::Input(*f));
    let block = panel_block(&app.settings.brand_name, active);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = PanelLayout::new(inner, fields.len() + 1);
    frame.render_widget(plan_selector(app, plan), layout.fields[0]);

    for (field, row) in fields.iter().zip(layout.fields.iter().skip(1)) {
        let placeholder = if *field == InputField::DwyAmortizationMonths {
            "12"
        } else {
            "0"
        };
        frame.render_widget(field_input(app, FormField::Input(*field), placeholder), *row);
    }
    render_stats(frame, app, MetricSection::WithPlan, layout.stats);
}

fn plan_selector(app: &App, selected: PlanKind) -> Paragraph<'static> {
    let focused = app.focused == FormField::Plan;
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![Span::styled(
        format!("{:<width$}", "Plan:", width = LABEL_WIDTH as usize),
        label_style,
    )];
    for kind in [PlanKind::Dfy, PlanKind::Dwy] {
        let style = if kind == selected {
            let bg = if focused { Color::Cyan } else { Color::Gray };
            Style::default().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", kind.label()), style));
        spans.push(Span::raw(" "));
    }

    Paragraph::new(Line::from(spans))
}
