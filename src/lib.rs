//! fisfmt - Turkish-locale display formatting for receipt capture.
//!
//! Renders the values the receipt screens show (amounts, dates, phone
//! numbers, tax IDs, file sizes, percentages and labels) the way a Turkish
//! user expects them: comma decimal separator, period thousands separator,
//! `dd.MM.yyyy` dates.
//!
//! # Features
//!
//! - Currency, percentage and compact number formatting
//! - Date patterns with Turkish month and weekday names
//! - Relative time phrases (`2 saat önce`)
//! - Phone number grouping and tax ID (VKN) normalization
//! - Base-1024 file sizes
//! - Turkish-aware title case and truncation
//!
//! Formatters never fail: missing or malformed input yields the `-`
//! placeholder. The `try_*` methods on [`Formatter`] expose the error when
//! the caller wants to know.
//!
//! # Example
//!
//! ```
//! use fisfmt::{format_currency, format_date, format_phone};
//!
//! assert_eq!(format_currency(1234.56), "1.234,56 ₺");
//! assert_eq!(format_date("2024-01-15"), "15.01.2024");
//! assert_eq!(format_phone("5551234567"), "555 123 45 67");
//! assert_eq!(format_currency(None), "-");
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod format;
pub mod locale;

pub use config::FormatConfig;
pub use error::{FormatError, Result};
pub use format::{
    format_compact_number, format_currency, format_currency_with, format_date, format_date_time,
    format_date_with, format_file_size, format_percentage, format_percentage_with, format_phone,
    format_relative_time, format_vkn, to_title_case, truncate_string, DateSource, Formatter,
};
