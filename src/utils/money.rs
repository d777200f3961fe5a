//! Parsing and display of money amounts.

use crate::errors::{AppError, AppResult};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a user-supplied amount. Only strictly positive decimals are accepted.
pub fn parse_amount(raw: &str) -> AppResult<Decimal> {
    let invalid = || AppError::Validation(format!("'{}' is not a valid amount (positive number)", raw));

    let amount = Decimal::from_str(raw.trim()).map_err(|_| invalid())?;
    if amount <= Decimal::ZERO {
        return Err(invalid());
    }
    Ok(amount)
}

/// Format an amount as `$1,234.50` (two decimals, thousands separators).
pub fn format_money(amount: Decimal, symbol: &str) -> String {
    let mut abs = amount.round_dp(2).abs();
    abs.rescale(2);

    let sign = if amount.round_dp(2).is_sign_negative() && !abs.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = abs.to_string();
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!("{sign}{symbol}{}.{frac_part}", group_thousands(int_part))
}

fn group_thousands(int_part: &str) -> String {
    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
