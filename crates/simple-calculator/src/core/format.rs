//! Conversions between display text and decimal values

use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::core::{CalcError, CalcResult};

/// Parses display text into a decimal.
///
/// Accepts what the keypad can produce: an optional leading `-` (from a
/// negative result), digits, and at most one `.`, which may lead or
/// trail (`".5"`, `"7."`). There is no limit on the number of digits.
/// Anything else, including the error marker,
/// is [`CalcError::InvalidNumber`]; empty text is
/// [`CalcError::EmptyOperand`].
pub fn parse_display(text: &str) -> CalcResult<BigDecimal> {
    if text.is_empty() {
        return Err(CalcError::EmptyOperand);
    }

    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let well_formed = unsigned.chars().any(|c| c.is_ascii_digit())
        && unsigned.chars().all(|c| c.is_ascii_digit() || c == '.')
        && unsigned.matches('.').count() <= 1;
    if !well_formed {
        return Err(CalcError::InvalidNumber(text.to_string()));
    }

    let mut canonical = String::with_capacity(text.len() + 1);
    if text.starts_with('-') {
        canonical.push('-');
    }
    if unsigned.starts_with('.') {
        canonical.push('0');
    }
    canonical.push_str(unsigned.strip_suffix('.').unwrap_or(unsigned));

    BigDecimal::from_str(&canonical).map_err(|_| CalcError::InvalidNumber(text.to_string()))
}

/// Formats a value for the display: plain notation, no trailing
/// fractional zeros, no trailing point, never `-0`.
#[must_use]
pub fn format_plain(value: &BigDecimal) -> String {
    value.normalized().to_plain_string()
}
