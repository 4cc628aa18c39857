//! Layout definitions for the TUI
//!
//! Header form on top, the two input panels side by side, the comparison row,
//! notes, and a one-line status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Company, representative and date
    pub header: Rect,
    /// Current situation panel
    pub current: Rect,
    /// Plan panel
    pub plan: Rect,
    /// Before/after comparison stats
    pub comparison: Rect,
    /// Notes
    pub notes: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),  // Header form
                Constraint::Min(14),    // Input panels
                Constraint::Length(5),  // Comparison
                Constraint::Length(5),  // Notes
                Constraint::Length(1),  // Status bar
            ])
            .split(area);

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(vertical[1]);

        Self {
            header: vertical[0],
            current: panels[0],
            plan: panels[1],
            comparison: vertical[2],
            notes: vertical[3],
            status_bar: vertical[4],
        }
    }
}

/// Inside an input panel: one row per field, then a strip of stats
pub struct PanelLayout {
    pub fields: Vec<Rect>,
    pub stats: Rect,
}

impl PanelLayout {
    /// Split a panel's inner area into `rows` field rows and a stats strip
    pub fn new(area: Rect, rows: usize) -> Self {
        let mut constraints: Vec<Constraint> = (0..rows).map(|_| Constraint::Length(1)).collect();
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(3));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        Self {
            fields: chunks[..rows].to_vec(),
            stats: chunks[rows + 1],
        }
    }
}

/// Split an area into `count` equal columns
pub fn columns(area: Rect, count: usize) -> Vec<Rect> {
    let count = count.max(1) as u32;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
        .split(area)
        .to_vec()
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_fills_area() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = AppLayout::new(area);
        assert_eq!(layout.status_bar.y, 39);
        assert_eq!(layout.current.width + layout.plan.width, 100);
        assert_eq!(layout.header.height, 5);
    }

    #[test]
    fn test_panel_layout_rows() {
        let layout = PanelLayout::new(Rect::new(0, 0, 40, 12), 5);
        assert_eq!(layout.fields.len(), 5);
        assert_eq!(layout.fields[4].y, 4);
        assert_eq!(layout.stats.height, 3);
        assert_eq!(layout.stats.y, 9);
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let r = centered_rect_fixed(80, 10, Rect::new(0, 0, 60, 20));
        assert_eq!(r.width, 60);
        assert_eq!(r.y, 5);
    }
}
