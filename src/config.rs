//! Formatter configuration.

/// Settings shared by every formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Text returned for missing or unparsable input.
    pub placeholder: String,
    /// Symbol appended to currency amounts.
    pub currency_symbol: String,
    /// Pattern used by `format_date` when the caller gives none.
    pub date_pattern: String,
    /// Pattern used by `format_date_time`.
    pub date_time_pattern: String,
    /// Fraction digits used by `format_percentage` by default.
    pub percentage_decimals: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            placeholder: "-".to_string(),
            currency_symbol: "₺".to_string(),
            date_pattern: "dd.MM.yyyy".to_string(),
            date_time_pattern: "dd.MM.yyyy HH:mm".to_string(),
            percentage_decimals: 2,
        }
    }
}

impl FormatConfig {
    /// Replace the placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Replace the currency symbol.
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }
}
