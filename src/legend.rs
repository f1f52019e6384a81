//! Text formatting for the legend and axis labels.

use chrono::DateTime;

use crate::data::MarketPoint;

/// Legend keys in display order
pub const LEGEND_KEYS: [&str; 4] = ["date", "price", "market cap", "volume"];

/// Digits after the decimal point for currency values
const CURRENCY_DECIMALS: usize = 10;

/// `M/D/YYYY` in UTC
pub fn format_date(timestamp_ms: i64) -> String {
    match DateTime::from_timestamp_millis(timestamp_ms) {
        Some(dt) => dt.format("%-m/%-d/%Y").to_string(),
        None => timestamp_ms.to_string(),
    }
}

/// Short month/year label for the time axis
pub fn format_axis_date(timestamp_ms: i64) -> String {
    match DateTime::from_timestamp_millis(timestamp_ms) {
        Some(dt) => dt.format("%b %Y").to_string(),
        None => String::new(),
    }
}

/// Insert `,` thousands separators into the integer part of a decimal string
pub fn with_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Dollar amount with ten decimals and thousands separators
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.*}", CURRENCY_DECIMALS, value);
    match fixed.strip_prefix('-') {
        Some(rest) => format!("-${}", with_thousands(rest)),
        None => format!("${}", with_thousands(&fixed)),
    }
}

/// The four legend lines for a focused point
pub fn legend_lines(point: &MarketPoint) -> [String; 4] {
    [
        format!("{}: {}", LEGEND_KEYS[0], format_date(point.timestamp)),
        format!("{}: {}", LEGEND_KEYS[1], format_currency(point.price)),
        format!("{}: {}", LEGEND_KEYS[2], format_currency(point.market_cap)),
        format!("{}: {}", LEGEND_KEYS[3], format_currency(point.volume)),
    ]
}
