//! ANSI color helper utilities for terminal output.

use crate::models::Kind;
use rust_decimal::Decimal;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Income is shown in green, expenses in red.
pub fn color_for_kind(kind: Kind) -> &'static str {
    match kind {
        Kind::Income => GREEN,
        Kind::Expense => RED,
    }
}

/// Balance color:
/// \>=0 → blue
/// \<0 → red
pub fn color_for_balance(value: Decimal) -> &'static str {
    if value.is_sign_negative() && !value.is_zero() {
        RED
    } else {
        BLUE
    }
}

/// Wrap `value` in `color`, or grey it out when it is empty.
pub fn colorize(value: &str, color: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        format!("{color}{value}{RESET}")
    }
}
