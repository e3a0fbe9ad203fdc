//! Pure conversion math and amount input handling.

use crate::core::currency::CurrencyCode;
use crate::core::rates::RateTable;

/// A single converted amount, recomputed on every render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub code: CurrencyCode,
    pub value: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Converts `amount` of `from` into every supported currency, in
/// [`CurrencyCode::ALL`] order, rounded to 2 decimal places.
pub fn convert_all(amount: f64, from: CurrencyCode, rates: &RateTable) -> Vec<Conversion> {
    let base = amount / rates.get(from);
    CurrencyCode::ALL
        .iter()
        .map(|code| Conversion {
            code: *code,
            value: round2(base * rates.get(*code)),
        })
        .collect()
}

/// Accepts a non-negative decimal number in progress: zero or more digits
/// with at most one decimal point. The empty string is valid (it reads as
/// an amount of zero).
pub fn is_valid_amount(input: &str) -> bool {
    let mut seen_point = false;
    for c in input.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    true
}

/// Empty or unparsable input reads as zero; the input layer rejects
/// anything else before it gets here.
pub fn parse_amount(input: &str) -> f64 {
    input.trim().parse().unwrap_or(0.0)
}
