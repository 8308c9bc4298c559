//! Phone number and tax ID (VKN) formatting.
//!
//! Both strip everything but digits before checking the length. Input that
//! does not have a recognized length is returned as given.

use super::Formatter;

fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

impl Formatter {
    /// Group a phone number as `555 123 45 67`, or `+90 555 123 45 67` when
    /// it carries the country code.
    pub fn format_phone<'a>(&self, phone: impl Into<Option<&'a str>>) -> String {
        let phone = match phone.into() {
            Some(phone) if !phone.is_empty() => phone,
            _ => return self.config.placeholder.clone(),
        };

        let digits = digits_only(phone);
        match digits.len() {
            10 => format!(
                "{} {} {} {}",
                &digits[0..3],
                &digits[3..6],
                &digits[6..8],
                &digits[8..10]
            ),
            12 if digits.starts_with("90") => format!(
                "+90 {} {} {} {}",
                &digits[2..5],
                &digits[5..8],
                &digits[8..10],
                &digits[10..12]
            ),
            len => {
                tracing::debug!("Leaving phone number with {} digits unformatted", len);
                phone.to_string()
            },
        }
    }

    /// Normalize a tax ID to its 10 digits.
    pub fn format_vkn<'a>(&self, vkn: impl Into<Option<&'a str>>) -> String {
        let vkn = match vkn.into() {
            Some(vkn) if !vkn.is_empty() => vkn,
            _ => return self.config.placeholder.clone(),
        };

        let digits = digits_only(vkn);
        if digits.len() == 10 {
            digits
        } else {
            tracing::debug!("Leaving tax ID with {} digits unformatted", digits.len());
            vkn.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("(555) 123-45 67"), "5551234567");
        assert_eq!(digits_only("abc"), "");
    }

    #[test]
    fn test_phone_ten_digits() {
        let f = Formatter::default();
        assert_eq!(f.format_phone("5551234567"), "555 123 45 67");
        assert_eq!(f.format_phone("(555) 123-4567"), "555 123 45 67");
    }

    #[test]
    fn test_phone_with_country_code() {
        let f = Formatter::default();
        assert_eq!(f.format_phone("905551234567"), "+90 555 123 45 67");
        assert_eq!(f.format_phone("+90 555 123 45 67"), "+90 555 123 45 67");
    }

    #[test]
    fn test_phone_passthrough() {
        let f = Formatter::default();
        assert_eq!(f.format_phone("123"), "123");
        assert_eq!(f.format_phone("05551234567"), "05551234567");
        assert_eq!(f.format_phone("445551234567"), "445551234567");
        assert_eq!(f.format_phone("-"), "-");
    }

    #[test]
    fn test_phone_missing() {
        let f = Formatter::default();
        assert_eq!(f.format_phone(""), "-");
        assert_eq!(f.format_phone(None), "-");
    }

    #[test]
    fn test_vkn() {
        let f = Formatter::default();
        assert_eq!(f.format_vkn("1234567890"), "1234567890");
        assert_eq!(f.format_vkn("123 456 78 90"), "1234567890");
        assert_eq!(f.format_vkn("12345"), "12345");
        assert_eq!(f.format_vkn("12345678901"), "12345678901");
        assert_eq!(f.format_vkn("-"), "-");
        assert_eq!(f.format_vkn(""), "-");
        assert_eq!(f.format_vkn(None), "-");
    }
}
