//! Currency and count formatting
//!
//! Amounts are shown as whole currency units with thousands separators.
//! Non-finite values render as zero, mirroring the normalizer's policy.

/// Format an amount as whole currency units, e.g. `$1,234,568` or `-$1,500`.
pub fn format_usd(value: f64, symbol: &str) -> String {
    let rounded = finite_or_zero(value).round();
    let digits = group_thousands(&format!("{:.0}", rounded.abs()));

    if rounded < 0.0 {
        format!("-{}{}", symbol, digits)
    } else {
        format!("{}{}", symbol, digits)
    }
}

/// Format an informational count with at most two decimals, e.g. `3` or `2.5`
pub fn format_count(value: f64) -> String {
    let formatted = format!("{:.2}", finite_or_zero(value));
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Insert `,` every three digits from the right
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0.0, "$"), "$0");
        assert_eq!(format_usd(999.0, "$"), "$999");
        assert_eq!(format_usd(1000.0, "$"), "$1,000");
        assert_eq!(format_usd(168000.0, "$"), "$168,000");
        assert_eq!(format_usd(1234567.5, "$"), "$1,234,568");
    }

    #[test]
    fn test_format_usd_negative() {
        assert_eq!(format_usd(-1500.0, "$"), "-$1,500");
        assert_eq!(format_usd(-0.4, "$"), "$0");
        assert_eq!(format_usd(-0.0, "$"), "$0");
    }

    #[test]
    fn test_format_usd_non_finite() {
        assert_eq!(format_usd(f64::NAN, "$"), "$0");
        assert_eq!(format_usd(f64::INFINITY, "$"), "$0");
        assert_eq!(format_usd(f64::NEG_INFINITY, "$"), "$0");
    }

    #[test]
    fn test_format_usd_symbol() {
        assert_eq!(format_usd(2500.0, "€"), "€2,500");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(3.0), "3");
        assert_eq!(format_count(2.5), "2.5");
        assert_eq!(format_count(1.234), "1.23");
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(-0.001), "0");
        assert_eq!(format_count(f64::NAN), "0");
        assert_eq!(format_count(40.0), "40");
    }
}
