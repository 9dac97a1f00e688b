//! Display formatting in the tr-TR convention: `.` groups thousands and
//! amounts are shown in whole lira.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::decimal::{Money, Rate};

pub const CURRENCY_SYMBOL: &str = "₺";

/// whole-lira amount with `.` thousands separators, e.g. `1.250.000`
pub fn format_grouped(value: Money) -> String {
    let whole = value.round_whole().as_decimal();
    let digits = whole.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if whole.is_sign_negative() && !whole.is_zero() {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// grouped amount with the lira sign, e.g. `₺1.250.000`
pub fn format_currency(value: Money) -> String {
    format!("{}{}", CURRENCY_SYMBOL, format_grouped(value))
}

/// ratio as a whole percentage, e.g. 0.6 -> `60`
pub fn format_percent(rate: Rate) -> String {
    rate.as_percentage()
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .trunc()
        .to_string()
}

/// ratio as a percentage with two decimals, e.g. 0.0265 -> `2.65`
pub fn format_rate(rate: Rate) -> String {
    let pct = rate
        .as_percentage()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", pct)
}

/// short form used in rule descriptions, e.g. `1M`, `2.5M`, `750K`
pub fn format_compact(value: Money) -> String {
    let d = value.as_decimal();
    let million = Decimal::from(1_000_000);
    let thousand = Decimal::from(1_000);

    if d.abs() >= million {
        format!("{}M", (d / million).round_dp(2).normalize())
    } else if d.abs() >= thousand {
        format!("{}K", (d / thousand).round_dp(2).normalize())
    } else {
        format_grouped(value)
    }
}
