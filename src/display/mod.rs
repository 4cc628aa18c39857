//! Display formatting for terminal and document output
//!
//! Currency/count formatting plus small text-layout helpers. No arithmetic
//! happens here beyond rounding for display.

pub mod currency;
pub mod report;

pub use currency::{format_count, format_usd};
pub use report::{double_separator, format_amount_colored, format_header, label_value, separator, truncate};
