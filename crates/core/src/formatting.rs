//! Display formatting for list views.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::Timestamp;

/// Format a price with exactly two decimals and `,` thousands separators.
///
/// Halves round away from zero: `1.005` -> `"1.01"`, `1234.5` -> `"1,234.50"`.
pub fn format_price(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    let text = rounded.abs().to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(text.len() + whole.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push('.');
    grouped.push_str(fraction);
    grouped
}

/// Format a timestamp as a `YYYY-MM-DD` calendar date (UTC).
pub fn format_date(ts: Timestamp) -> String {
    ts.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().expect("valid decimal")
    }

    #[test]
    fn pads_to_two_decimals() {
        assert_eq!(format_price(dec("1.5")), "1.50");
        assert_eq!(format_price(dec("0")), "0.00");
        assert_eq!(format_price(dec("12")), "12.00");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_price(dec("1.005")), "1.01");
        assert_eq!(format_price(dec("2.344")), "2.34");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_price(dec("999.99")), "999.99");
        assert_eq!(format_price(dec("1234.5")), "1,234.50");
        assert_eq!(format_price(dec("1234567.891")), "1,234,567.89");
    }

    #[test]
    fn keeps_sign_for_negative_amounts() {
        assert_eq!(format_price(dec("-1234.5")), "-1,234.50");
        assert_eq!(format_price(dec("-0.001")), "0.00");
    }

    #[test]
    fn date_drops_time_of_day() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 5, 23, 59, 59).unwrap();
        assert_eq!(format_date(ts), "2024-01-05");
    }
}
