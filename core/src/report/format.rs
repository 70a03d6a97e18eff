//! Display formatting for money, percentages and years.

use crate::types::{Money, Percent, Years};

/// `$1,234,567.89`; negatives as `-$1,234.00`.
pub fn currency(value: Money) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${}.{cents}", group_thousands(whole))
}

/// `102.70%`
pub fn percent(value: Percent) -> String {
    format!("{value:.2}%")
}

pub fn years(value: Years) -> String {
    format!("{value:.2}")
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(currency(0.0), "$0.00");
        assert_eq!(currency(999.5), "$999.50");
        assert_eq!(currency(1000.0), "$1,000.00");
        assert_eq!(currency(74000.0), "$74,000.00");
        assert_eq!(currency(150000.0), "$150,000.00");
        assert_eq!(currency(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn currency_negative_keeps_sign_outside_symbol() {
        assert_eq!(currency(-2500.0), "-$2,500.00");
        assert_eq!(currency(-0.001), "$0.00");
    }

    #[test]
    fn percent_and_years_use_two_decimals() {
        assert_eq!(percent(102.702_702), "102.70%");
        assert_eq!(percent(-100.0), "-100.00%");
        assert_eq!(years(74000.0 / 150000.0), "0.49");
    }
}
