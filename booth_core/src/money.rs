//! Currency arithmetic helpers.
//!
//! Amounts are `rust_decimal::Decimal` in the rate card's currency. Line
//! items, category totals, tax and contingency are rounded to the minor
//! unit (two places, midpoint away from zero) before they are summed.
//!
//! `Decimal` tops out near 7.9e28 and its operators panic past that, so every
//! product, quotient and sum on caller-supplied values goes through the
//! checked helpers here and fails with `AmountOverflow` naming the field.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::errors::{EstimateError, EstimateResult};

/// Decimal places of the currency minor unit (paise, cents)
pub const MINOR_UNIT_DP: u32 = 2;

/// Round an amount to the currency minor unit.
pub fn round_minor(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MINOR_UNIT_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert a percentage (18 for 18%) into a fraction (0.18).
///
/// `None` is treated as 0%.
pub fn pct_to_rate(pct: Option<Decimal>) -> Decimal {
    pct.unwrap_or(Decimal::ZERO) / dec!(100)
}

/// `a × b`, or `AmountOverflow` for `field`.
pub fn mul_checked(field: &str, a: Decimal, b: Decimal) -> EstimateResult<Decimal> {
    a.checked_mul(b)
        .ok_or_else(|| EstimateError::amount_overflow(field))
}

/// `a ÷ b`, or `AmountOverflow` for `field`. Division by zero is reported
/// the same way.
pub fn div_checked(field: &str, a: Decimal, b: Decimal) -> EstimateResult<Decimal> {
    a.checked_div(b)
        .ok_or_else(|| EstimateError::amount_overflow(field))
}

/// `a + b`, or `AmountOverflow` for `field`.
pub fn add_checked(field: &str, a: Decimal, b: Decimal) -> EstimateResult<Decimal> {
    a.checked_add(b)
        .ok_or_else(|| EstimateError::amount_overflow(field))
}

/// Sum of `amounts`, or `AmountOverflow` for `field`.
pub fn sum_checked(
    field: &str,
    amounts: impl IntoIterator<Item = Decimal>,
) -> EstimateResult<Decimal> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| add_checked(field, acc, amount))
}

/// Apply a percentage to a base amount, rounded to the minor unit.
pub fn percent_of(field: &str, base: Decimal, pct: Option<Decimal>) -> EstimateResult<Decimal> {
    Ok(round_minor(mul_checked(field, base, pct_to_rate(pct))?))
}

/// Format an amount with two decimals and thousands separators
/// (`502,000.00`). Grouping is always in threes.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = round_minor(amount);
    let text = format!("{:.2}", rounded.abs());
    let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}.{}", grouped, frac)
    } else {
        format!("{}.{}", grouped, frac)
    }
}
