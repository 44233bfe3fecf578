//! Utility functions and helpers

use rand::distributions::Alphanumeric;
use rand::Rng;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Subunits per main currency unit (cents per dollar)
pub const SUBUNITS_PER_UNIT: i64 = 100;

/// Insert a separator between every group of three digits
pub fn group_thousands(digits: &str, separator: &str) -> String {
    let mut result = String::new();
    let len = digits.chars().count();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push_str(separator);
        }
        result.push(c);
    }
    result
}

/// Format an amount of subunits as a main-unit string with two decimals
///
/// `format_subunits(-123456, " ", ".")` gives `"-1 234.56"`.
pub fn format_subunits(amount: i64, thousands_separator: &str, decimal_separator: &str) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    let units = abs / SUBUNITS_PER_UNIT as u64;
    let cents = abs % SUBUNITS_PER_UNIT as u64;
    format!(
        "{}{}{}{:02}",
        sign,
        group_thousands(&units.to_string(), thousands_separator),
        decimal_separator,
        cents
    )
}

/// Parse a decimal main-unit amount (e.g. `"4.50"`) into subunits
///
/// Digits past the second decimal place are floored, so `"-0.005"` becomes `-1`.
/// Returns `None` for anything that is not a plain decimal number or does not fit.
pub fn parse_main_units(input: &str) -> Option<i64> {
    let input = input.trim();
    if !input.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    let amount: Decimal = input.parse().ok()?;
    amount
        .checked_mul(Decimal::from(SUBUNITS_PER_UNIT))?
        .floor()
        .to_i64()
}

/// Generate a random alphanumeric identifier
///
/// With a non-empty prefix the result is `"{prefix}-{random}"`.
pub fn generate_uid(prefix: &str, length: usize) -> String {
    let hash: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect();
    if prefix.is_empty() {
        hash
    } else {
        format!("{}-{}", prefix, hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1", ","), "1");
        assert_eq!(group_thousands("123", ","), "123");
        assert_eq!(group_thousands("1234", ","), "1,234");
        assert_eq!(group_thousands("1234567", " "), "1 234 567");
    }

    #[test]
    fn test_format_subunits() {
        assert_eq!(format_subunits(0, " ", "."), "0.00");
        assert_eq!(format_subunits(450, " ", "."), "4.50");
        assert_eq!(format_subunits(-123456, " ", "."), "-1 234.56");
        assert_eq!(format_subunits(100_000_00, ".", ","), "100.000,00");
    }

    #[test]
    fn test_parse_main_units() {
        assert_eq!(parse_main_units("4.5"), Some(450));
        assert_eq!(parse_main_units("4.50"), Some(450));
        assert_eq!(parse_main_units("12"), Some(1200));
        assert_eq!(parse_main_units("0.99"), Some(99));
        assert_eq!(parse_main_units("0.29"), Some(29));
        assert_eq!(parse_main_units("-25.5"), Some(-2550));
        assert_eq!(parse_main_units("1.239"), Some(123));
        assert_eq!(parse_main_units("-0.005"), Some(-1));
        assert_eq!(parse_main_units(" +3.00 "), Some(300));
    }

    #[test]
    fn test_parse_main_units_rejects_garbage() {
        assert_eq!(parse_main_units(""), None);
        assert_eq!(parse_main_units("."), None);
        assert_eq!(parse_main_units("abc"), None);
        assert_eq!(parse_main_units("1,000"), None);
        assert_eq!(parse_main_units("1.2.3"), None);
        assert_eq!(parse_main_units("--1"), None);
        assert_eq!(parse_main_units("99999999999999999999999"), None);
    }

    #[test]
    fn test_generate_uid() {
        let id = generate_uid("", 8);
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));

        let prefixed = generate_uid("tx", 6);
        assert!(prefixed.starts_with("tx-"));
        assert_eq!(prefixed.len(), 9);
    }
}
