//! Display formatting helpers

use std::fmt::Display;

/// Format a number with a comma between every group of three integer digits
///
/// Works on anything whose `Display` output is a plain decimal number
/// (integers, floats, decimals). Fraction digits are left ungrouped.
///
/// ```
/// use storefront_core::format_number;
///
/// assert_eq!(format_number(1_234_567), "1,234,567");
/// assert_eq!(format_number(-9876.5), "-9,876.5");
/// ```
pub fn format_number(value: impl Display) -> String {
    let raw = value.to_string();

    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let (integer, rest) = unsigned.split_at(digits_end);

    let mut grouped = String::with_capacity(raw.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.push_str(rest);
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(1_234_567), "1,234,567");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(100_000u32), "100,000");
        assert_eq!(format_number(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn short_numbers_untouched() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(7), "7");
        assert_eq!(format_number(999), "999");
    }

    #[test]
    fn negative_numbers() {
        assert_eq!(format_number(-1_234), "-1,234");
        assert_eq!(format_number(-123), "-123");
        assert_eq!(format_number(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn fraction_digits_are_not_grouped() {
        assert_eq!(format_number(1234.5678), "1,234.5678");
        assert_eq!(format_number(0.5), "0.5");
    }
}
