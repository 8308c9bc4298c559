//! Number rendering for the Turkish locale.

/// Separator between the integer and fraction parts.
pub const DECIMAL_SEPARATOR: char = ',';

/// Separator between groups of three integer digits.
pub const GROUP_SEPARATOR: char = '.';

/// Most fraction digits a number is rendered with.
pub const MAX_FRACTION_DIGITS: usize = 100;

/// Insert the group separator every three digits from the right.
///
/// Expects a run of ASCII digits without sign.
pub fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(GROUP_SEPARATOR);
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Render `value` with exactly `decimals` fraction digits.
///
/// A value that rounds to zero never carries a minus sign. `decimals` is
/// capped at [`MAX_FRACTION_DIGITS`].
pub fn format_decimal(value: f64, decimals: usize, grouped: bool) -> String {
    let decimals = decimals.min(MAX_FRACTION_DIGITS);
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let negative = value.is_sign_negative() && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));

    let mut result = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    if negative {
        result.push('-');
    }
    if grouped {
        result.push_str(&group_thousands(int_part));
    } else {
        result.push_str(int_part);
    }
    if let Some(frac_part) = frac_part {
        result.push(DECIMAL_SEPARATOR);
        result.push_str(frac_part);
    }
    result
}

/// Drop trailing fraction zeros, and the separator if nothing is left.
pub fn trim_fraction(text: &str) -> String {
    if !text.contains(DECIMAL_SEPARATOR) {
        return text.to_string();
    }
    text.trim_end_matches('0')
        .trim_end_matches(DECIMAL_SEPARATOR)
        .to_string()
}
