//! Price display and parsing.
//!
//! Prices are currency-agnostic in the model; the currency label is only
//! applied here, at the display edge.

use itertools::Itertools;

use crate::config::GALLERY;

/// Card price text: currency label plus exactly two decimals, e.g. `KES 2200.00`.
pub fn format_price(price: f64) -> String {
    format!("{} {:.2}", GALLERY.currency, price)
}

/// Slider label text: currency label plus a thousands-grouped integer, e.g. `KES 50,000`.
pub fn format_price_label(amount: u32) -> String {
    format!("{} {}", GALLERY.currency, group_thousands(amount))
}

fn group_thousands(amount: u32) -> String {
    let digits = amount.to_string();
    let head = digits.len() % 3;
    let mut groups: Vec<&str> = Vec::new();
    if head > 0 {
        groups.push(&digits[..head]);
    }
    groups.extend(
        digits.as_bytes()[head..]
            .chunks(3)
            .filter_map(|chunk| std::str::from_utf8(chunk).ok()),
    );
    groups.iter().join(",")
}

/// Read a displayed price back into a number.
/// Strips the currency label, every thousands separator and surrounding
/// whitespace. Returns `None` for text that still isn't a number.
pub fn parse_price_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let without_currency = trimmed
        .strip_prefix(GALLERY.currency)
        .unwrap_or(trimmed)
        .replace(',', "");
    let value: f64 = without_currency.trim().parse().ok()?;
    value.is_finite().then_some(value)
}
