//! Currency, percentage and compact number formatting.

use super::{finite, Formatter};
use crate::error::{FormatError, Result};
use crate::locale::{format_decimal, trim_fraction, MAX_FRACTION_DIGITS};

/// Compact suffixes, smallest first.
const COMPACT_UNITS: [(f64, &str); 3] = [(1e3, "K"), (1e6, "M"), (1e9, "B")];

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl Formatter {
    /// Format an amount with two fraction digits and grouping.
    pub fn try_format_currency(
        &self,
        amount: impl Into<Option<f64>>,
        show_currency: bool,
    ) -> Result<String> {
        let amount = finite(amount.into())?;
        let text = format_decimal(amount, 2, true);
        if show_currency {
            Ok(format!("{} {}", text, self.config.currency_symbol))
        } else {
            Ok(text)
        }
    }

    /// Format an amount followed by the currency symbol.
    pub fn format_currency(&self, amount: impl Into<Option<f64>>) -> String {
        self.format_currency_with(amount, true)
    }

    /// Format an amount, with or without the currency symbol.
    pub fn format_currency_with(&self, amount: impl Into<Option<f64>>, show_currency: bool) -> String {
        self.or_placeholder(self.try_format_currency(amount, show_currency))
    }

    /// Abbreviate a number with a K, M or B suffix.
    ///
    /// Numbers below a thousand are rounded to an integer. The abbreviated
    /// form keeps one fraction digit unless it is zero.
    pub fn try_format_compact_number(&self, num: impl Into<Option<f64>>) -> Result<String> {
        let num = finite(num.into())?;
        let rounded = num.round();
        if rounded.abs() < 1000.0 {
            return Ok(format!("{}", rounded as i64));
        }

        let abs = num.abs();
        let mut unit = COMPACT_UNITS
            .iter()
            .rposition(|(size, _)| abs >= *size)
            .unwrap_or(0);
        let mut scaled = round_one_decimal(abs / COMPACT_UNITS[unit].0);
        if scaled >= 1000.0 && unit + 1 < COMPACT_UNITS.len() {
            unit += 1;
            scaled = round_one_decimal(abs / COMPACT_UNITS[unit].0);
        }

        let sign = if num < 0.0 { "-" } else { "" };
        let digits = trim_fraction(&format_decimal(scaled, 1, false));
        Ok(format!("{}{}{}", sign, digits, COMPACT_UNITS[unit].1))
    }

    /// Abbreviate a number, degrading to the placeholder.
    pub fn format_compact_number(&self, num: impl Into<Option<f64>>) -> String {
        self.or_placeholder(self.try_format_compact_number(num))
    }

    /// Format an already-scaled percentage value, e.g. `45.678` as `45,68%`.
    pub fn try_format_percentage(&self, value: impl Into<Option<f64>>, decimals: usize) -> Result<String> {
        if decimals > MAX_FRACTION_DIGITS {
            return Err(FormatError::PrecisionOutOfRange { decimals });
        }
        let value = finite(value.into())?;
        Ok(format!("{}%", format_decimal(value, decimals, false)))
    }

    /// Format a percentage with the configured precision.
    pub fn format_percentage(&self, value: impl Into<Option<f64>>) -> String {
        self.format_percentage_with(value, self.config.percentage_decimals)
    }

    /// Format a percentage with the given number of fraction digits.
    pub fn format_percentage_with(&self, value: impl Into<Option<f64>>, decimals: usize) -> String {
        self.or_placeholder(self.try_format_percentage(value, decimals))
    }
}

#[cfg(test)]
mod tests {
    use crate::config::FormatConfig;
    use crate::error::FormatError;
    use crate::format::Formatter;

    #[test]
    fn test_currency() {
        let f = Formatter::default();
        assert_eq!(f.format_currency(1234.56), "1.234,56 ₺");
        assert_eq!(f.format_currency_with(1234.56, false), "1.234,56");
        assert_eq!(f.format_currency(0.0), "0,00 ₺");
        assert_eq!(f.format_currency(1_000_000.0), "1.000.000,00 ₺");
        assert_eq!(f.format_currency(-42.1), "-42,10 ₺");
    }

    #[test]
    fn test_currency_missing() {
        let f = Formatter::default();
        assert_eq!(f.format_currency(None), "-");
        assert_eq!(f.format_currency(f64::NAN), "-");
        assert_eq!(f.try_format_currency(None, true), Err(FormatError::Missing));
    }

    #[test]
    fn test_currency_symbol_from_config() {
        let f = Formatter::new(FormatConfig::default().with_currency_symbol("TL"));
        assert_eq!(f.format_currency(10.0), "10,00 TL");
    }

    #[test]
    fn test_compact_number() {
        let f = Formatter::default();
        assert_eq!(f.format_compact_number(500.0), "500");
        assert_eq!(f.format_compact_number(1234.0), "1,2K");
        assert_eq!(f.format_compact_number(1000.0), "1K");
        assert_eq!(f.format_compact_number(1_234_567.0), "1,2M");
        assert_eq!(f.format_compact_number(2_500_000_000.0), "2,5B");
        assert_eq!(f.format_compact_number(-1500.0), "-1,5K");
    }

    #[test]
    fn test_compact_number_rounding_edges() {
        let f = Formatter::default();
        assert_eq!(f.format_compact_number(999.4), "999");
        assert_eq!(f.format_compact_number(999.6), "1K");
        assert_eq!(f.format_compact_number(999_999.0), "1M");
        assert_eq!(f.format_compact_number(-0.4), "0");
        assert_eq!(f.format_compact_number(None), "-");
    }

    #[test]
    fn test_percentage() {
        let f = Formatter::default();
        assert_eq!(f.format_percentage(45.678), "45,68%");
        assert_eq!(f.format_percentage(100.0), "100,00%");
        assert_eq!(f.format_percentage_with(45.678, 0), "46%");
        assert_eq!(f.format_percentage_with(12.5, 1), "12,5%");
        assert_eq!(f.format_percentage(None), "-");
    }

    #[test]
    fn test_percentage_precision_limit() {
        let f = Formatter::default();
        assert_eq!(f.format_percentage_with(1.0, 100).len(), "1,".len() + 100 + "%".len());
        assert_eq!(
            f.try_format_percentage(1.0, 101),
            Err(FormatError::PrecisionOutOfRange { decimals: 101 })
        );
        assert_eq!(f.format_percentage_with(1.0, 70_000), "-");
    }
}
