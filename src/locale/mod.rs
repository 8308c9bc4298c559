//! Turkish locale primitives.
//!
//! Number rendering with decimal comma and period grouping, calendar names
//! and the date pattern renderer, and Turkish-aware letter casing. The
//! domain formatters in [`crate::format`] are built on these.

mod calendar;
mod case;
mod number;

pub use calendar::{render_pattern, MONTHS, MONTHS_SHORT, WEEKDAYS, WEEKDAYS_SHORT};
pub use case::{capitalize, to_lower_tr, to_upper_tr};
pub use number::{
    format_decimal, group_thousands, trim_fraction, DECIMAL_SEPARATOR, GROUP_SEPARATOR,
    MAX_FRACTION_DIGITS,
};
