//! Money amounts are kept as integral cents.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats cents as a dollar amount with thousands separators, e.g. `$1,234.56`.
pub fn format_cents(cents: i64) -> String {
    let amount = Decimal::new(cents, 2);
    let sign = if amount.is_sign_negative() { "-" } else { "" };

    let text = amount.abs().to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let digits: Vec<char> = whole.chars().collect();
    let grouped = digits
        .rchunks(3)
        .rev()
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(",");

    format!("{sign}${grouped}.{fraction}")
}

/// Parses a price such as `"$1,234.5"` into cents, rounding half away from
/// zero at the cent.
///
/// Unparseable or empty input yields zero.
pub fn parse_price_cents(value: Option<&str>) -> i64 {
    let Some(value) = value else {
        return 0;
    };
    let cleaned: String = value
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();

    Decimal::from_str(cleaned.trim())
        .ok()
        .map(|amount| amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|amount| amount.checked_mul(Decimal::ONE_HUNDRED))
        .and_then(|cents| cents.to_i64())
        .unwrap_or(0)
}
