//! Money fields of the claim export.
//!
//! Amounts are written with a decimal separator and an optional sign, e.g. `123.45` or `-50.00`.
//! Parsing drops both the separator and the sign and reads what is left as a count of minor
//! units. The sign is lost on purpose: reversals cannot be told apart from payments.

use crate::types::Amount;

const DECIMAL_SEPARATOR: char = '.';
const MINUS_SIGN: char = '-';

/// Parse an amount into minor units, discarding separator and sign.
///
/// Every `-` is dropped, a `+` only when it leads the text. The remainder must be a non-empty
/// run of ASCII digits fitting a 32-bit signed integer.
pub fn parse_cents(text: &str) -> Result<i64, String> {
    let unsigned = text.strip_prefix('+').unwrap_or(text);
    let digits: String = unsigned
        .chars()
        .filter(|c| *c != DECIMAL_SEPARATOR && *c != MINUS_SIGN)
        .collect();

    if digits.is_empty() {
        return Err("no digits".to_string());
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
        return Err(format!("unexpected character '{bad}'"));
    }

    let value: i64 = digits
        .parse()
        .map_err(|_| "value out of range".to_string())?;
    if value > i64::from(i32::MAX) {
        return Err("value out of range".to_string());
    }
    Ok(value)
}

/// Display form of an amount: the source text with every minus sign removed
pub fn display_amount(text: &str) -> String {
    text.replace('-', "")
}

/// Parse a money field into an [`Amount`]
pub fn parse_amount(text: &str) -> Result<Amount, String> {
    let cents = parse_cents(text)?;
    Ok(Amount::new(cents, display_amount(text)))
}
