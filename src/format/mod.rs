//! Domain formatters.
//!
//! Every operation lives on [`Formatter`], which carries the
//! [`FormatConfig`]. The free functions below use a shared formatter with
//! the Turkish defaults and are what display code normally calls.
//!
//! Fallible operations come in pairs: `try_*` returns a [`Result`] and the
//! plain form degrades to the placeholder (or to the original input for
//! phone numbers and tax IDs). Display code never sees an error.

mod contact;
mod date;
mod money;
mod size;
mod text;

use std::sync::LazyLock;

use crate::config::FormatConfig;
use crate::error::{FormatError, Result};

pub use date::DateSource;
pub use text::{to_title_case, truncate_string};

static DEFAULT_FORMATTER: LazyLock<Formatter> = LazyLock::new(Formatter::default);

/// Formats domain values as display text.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    /// Create a formatter with the given configuration.
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    /// The formatter's configuration.
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// The text returned for missing or unparsable input.
    pub fn placeholder(&self) -> &str {
        &self.config.placeholder
    }

    fn or_placeholder(&self, result: Result<String>) -> String {
        result.unwrap_or_else(|e| {
            tracing::debug!("Falling back to placeholder: {}", e);
            self.config.placeholder.clone()
        })
    }
}

/// Reject missing and non-finite numbers.
fn finite(value: Option<f64>) -> Result<f64> {
    match value {
        None => Err(FormatError::Missing),
        Some(v) if !v.is_finite() => Err(FormatError::InvalidNumber),
        Some(v) => Ok(v),
    }
}

/// Format an amount as Turkish lira, e.g. `1.234,56 ₺`.
pub fn format_currency(amount: impl Into<Option<f64>>) -> String {
    DEFAULT_FORMATTER.format_currency(amount)
}

/// Format an amount, with or without the currency symbol.
pub fn format_currency_with(amount: impl Into<Option<f64>>, show_currency: bool) -> String {
    DEFAULT_FORMATTER.format_currency_with(amount, show_currency)
}

/// Format a date as `dd.MM.yyyy`.
pub fn format_date<D: DateSource + ?Sized>(date: &D) -> String {
    DEFAULT_FORMATTER.format_date(date)
}

/// Format a date with a custom pattern.
pub fn format_date_with<D: DateSource + ?Sized>(date: &D, pattern: &str) -> String {
    DEFAULT_FORMATTER.format_date_with(date, pattern)
}

/// Format a date as `dd.MM.yyyy HH:mm`.
pub fn format_date_time<D: DateSource + ?Sized>(date: &D) -> String {
    DEFAULT_FORMATTER.format_date_time(date)
}

/// Describe how long ago (or how far ahead) a date is, e.g. `2 saat önce`.
pub fn format_relative_time<D: DateSource + ?Sized>(date: &D) -> String {
    DEFAULT_FORMATTER.format_relative_time(date)
}

/// Group a Turkish phone number, e.g. `555 123 45 67`.
pub fn format_phone<'a>(phone: impl Into<Option<&'a str>>) -> String {
    DEFAULT_FORMATTER.format_phone(phone)
}

/// Normalize a 10-digit tax ID (VKN).
pub fn format_vkn<'a>(vkn: impl Into<Option<&'a str>>) -> String {
    DEFAULT_FORMATTER.format_vkn(vkn)
}

/// Abbreviate a number, e.g. `1,2K`.
pub fn format_compact_number(num: impl Into<Option<f64>>) -> String {
    DEFAULT_FORMATTER.format_compact_number(num)
}

/// Format a percentage with two fraction digits, e.g. `45,68%`.
pub fn format_percentage(value: impl Into<Option<f64>>) -> String {
    DEFAULT_FORMATTER.format_percentage(value)
}

/// Format a percentage with the given number of fraction digits.
pub fn format_percentage_with(value: impl Into<Option<f64>>, decimals: usize) -> String {
    DEFAULT_FORMATTER.format_percentage_with(value, decimals)
}

/// Format a byte count in base-1024 units, e.g. `1,5 KB`.
pub fn format_file_size(bytes: u64) -> String {
    DEFAULT_FORMATTER.format_file_size(bytes)
}
