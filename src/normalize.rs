//! Input normalization
//!
//! Turns free-form field text into a finite `f64`. Normalization is total:
//! anything that does not yield a number becomes `0`, so a half-typed or
//! garbled field never blocks the calculator.

/// Normalize arbitrary field text into a finite number.
///
/// Every character other than an ASCII digit, `.` or `-` is dropped, then the
/// longest leading decimal number is read and the rest is ignored.
///
/// # Examples
/// ```
/// use roi_calc::normalize::normalize;
/// assert_eq!(normalize("$12,345.67abc"), 12345.67);
/// assert_eq!(normalize("1.2.3"), 1.2);
/// assert_eq!(normalize("n/a"), 0.0);
/// ```
pub fn normalize(text: &str) -> f64 {
    let stripped: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    decimal_prefix(&stripped)
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Normalize a month count, never returning less than `1`.
///
/// Used for the amortization period, which is a divisor.
pub fn normalize_months(text: &str) -> f64 {
    normalize(text).max(1.0)
}

/// Longest prefix of `s` shaped like `-?digits(.digits)?`, or `None` when it
/// holds no digit at all.
fn decimal_prefix(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if bytes.first() == Some(&b'-') {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let int_digits = end - int_start;

    let mut frac_digits = 0;
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        frac_digits = frac_end - end - 1;
        if frac_digits > 0 {
            end = frac_end;
        }
    }

    if int_digits + frac_digits == 0 {
        None
    } else {
        Some(&s[..end])
    }
}
