//! Error types for fisfmt.
//!
//! Formatters never surface these to display code: each fallible operation
//! has a `try_*` form returning [`Result`] and a total form that degrades to
//! the placeholder. The errors exist so the degrade path is visible.

use thiserror::Error;

/// Result type alias for formatting operations.
pub type Result<T> = std::result::Result<T, FormatError>;

/// Errors that can occur while formatting a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Input was null, empty or otherwise absent.
    #[error("Missing value")]
    Missing,

    /// Input could not be parsed as a date.
    #[error("Invalid date: {input}")]
    InvalidDate {
        /// The rejected input.
        input: String,
    },

    /// Input number was NaN or infinite.
    #[error("Invalid number")]
    InvalidNumber,

    /// Requested more fraction digits than can be rendered.
    #[error("Precision out of range: {decimals} fraction digits")]
    PrecisionOutOfRange {
        /// The requested number of fraction digits.
        decimals: usize,
    },

    /// Date pattern contained a letter run that is not a known token.
    #[error("Unknown date pattern token: {token}")]
    UnknownPatternToken {
        /// The offending letter run.
        token: String,
    },

    /// Date pattern opened a quoted literal without closing it.
    #[error("Unterminated literal in date pattern")]
    UnterminatedLiteral,
}

impl FormatError {
    /// Create an InvalidDate error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }

    /// Create an UnknownPatternToken error.
    pub fn unknown_token(token: impl Into<String>) -> Self {
        Self::UnknownPatternToken {
            token: token.into(),
        }
    }
}
