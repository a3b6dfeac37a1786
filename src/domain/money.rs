//! Monetary amounts for guest fees.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::error::ValidationError;

/// Fee amount represented as a Decimal for precision.
pub type Amount = Decimal;

/// Fraction digits kept for every stored amount.
pub const CENT_DIGITS: u32 = 2;

/// Coerce free-form input into a fee amount.
///
/// Empty input means nothing was paid. A leading `$` and thousands
/// separators are accepted. The result always carries two fraction digits.
///
/// # Errors
/// Returns a [`ValidationError`] for non-numeric, negative, sub-cent or
/// oversized input.
pub fn parse_amount(raw: &str) -> Result<Amount, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::new(0, CENT_DIGITS));
    }

    let digits: String = trimmed
        .strip_prefix('$')
        .unwrap_or(trimmed)
        .chars()
        .filter(|c| *c != ',')
        .collect();

    let amount = Decimal::from_str(&digits)
        .map_err(|_| ValidationError::InvalidAmount(raw.to_string()))?;

    normalize_amount(amount)
}

/// Check an already-numeric amount and bring it to two fraction digits.
///
/// # Errors
/// Returns a [`ValidationError`] for negative or sub-cent amounts, and for
/// amounts too large to carry two fraction digits.
pub fn normalize_amount(amount: Amount) -> Result<Amount, ValidationError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::NegativeAmount(amount));
    }
    if amount.normalize().scale() > CENT_DIGITS {
        return Err(ValidationError::FractionalCents(amount));
    }

    let mut cents = if amount.is_zero() { Decimal::ZERO } else { amount };
    cents.rescale(CENT_DIGITS);
    if cents.scale() != CENT_DIGITS {
        return Err(ValidationError::AmountTooLarge(amount));
    }
    Ok(cents)
}

/// Render an amount the en_US way: `$1,234.50`.
#[must_use]
pub fn format_currency(amount: Amount) -> String {
    let rounded = amount.round_dp(CENT_DIGITS);
    let body = format!("{:.2}", rounded.abs());
    let (whole, cents) = body.split_once('.').unwrap_or((body.as_str(), "00"));
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{sign}${}.{cents}", group_thousands(whole))
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
