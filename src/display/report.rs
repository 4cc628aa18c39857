//! Text layout helpers for terminal and document output

use super::currency::format_usd;

/// Format an amount with color hints for terminal display
pub fn format_amount_colored(amount: f64, symbol: &str) -> String {
    let text = format_usd(amount, symbol);
    if amount.is_finite() && amount.round() < 0.0 {
        format!("\x1b[31m{}\x1b[0m", text) // Red for negative
    } else if amount.is_finite() && amount.round() > 0.0 {
        format!("\x1b[32m{}\x1b[0m", text) // Green for positive
    } else {
        text
    }
}

/// Format a header line centered in `width` columns
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = if len >= width { 0 } else { (width - len) / 2 };
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// `label ........ value` line with the value right-aligned at `width`
pub fn label_value(label: &str, value: &str, width: usize) -> String {
    let used = label.chars().count() + value.chars().count() + 2;
    let dots = width.saturating_sub(used).max(1);
    format!("{} {} {}", label, ".".repeat(dots), value)
}
