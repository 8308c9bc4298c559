//! Date, date-time and relative time formatting.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use super::Formatter;
use crate::error::{FormatError, Result};
use crate::locale::render_pattern;

/// Layouts accepted for date strings without an offset.
const NAIVE_DATE_TIME_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A value that can be read as a local wall-clock date-time.
///
/// `None` and blank strings are missing values.
pub trait DateSource {
    /// Resolve to local date-time.
    fn to_local(&self) -> Result<NaiveDateTime>;
}

impl DateSource for str {
    fn to_local(&self) -> Result<NaiveDateTime> {
        parse_date(self)
    }
}

impl DateSource for String {
    fn to_local(&self) -> Result<NaiveDateTime> {
        parse_date(self)
    }
}

impl DateSource for NaiveDate {
    fn to_local(&self) -> Result<NaiveDateTime> {
        Ok(self.and_time(NaiveTime::MIN))
    }
}

impl DateSource for NaiveDateTime {
    fn to_local(&self) -> Result<NaiveDateTime> {
        Ok(*self)
    }
}

impl<Tz: TimeZone> DateSource for DateTime<Tz> {
    fn to_local(&self) -> Result<NaiveDateTime> {
        Ok(self.with_timezone(&Local).naive_local())
    }
}

impl<T: DateSource + ?Sized> DateSource for &T {
    fn to_local(&self) -> Result<NaiveDateTime> {
        (**self).to_local()
    }
}

impl<T: DateSource> DateSource for Option<T> {
    fn to_local(&self) -> Result<NaiveDateTime> {
        match self {
            Some(value) => value.to_local(),
            None => Err(FormatError::Missing),
        }
    }
}

/// Parse an ISO 8601 date or date-time string.
///
/// Strings with an offset are converted to local time; the rest are taken
/// as local already. A bare date means midnight.
fn parse_date(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return Err(FormatError::Missing);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Ok(datetime.with_timezone(&Local).naive_local());
    }

    for layout in NAIVE_DATE_TIME_LAYOUTS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(input, layout) {
            return Ok(datetime);
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| FormatError::invalid_date(input))
}

/// Whole calendar months from `earlier` to `later`.
fn months_between(earlier: &NaiveDateTime, later: &NaiveDateTime) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12 + i64::from(later.month())
        - i64::from(earlier.month());
    if (later.day(), later.time()) < (earlier.day(), earlier.time()) {
        months -= 1;
    }
    months.max(0)
}

fn divide_rounded(value: i64, divisor: i64) -> i64 {
    (value as f64 / divisor as f64).round() as i64
}

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_MONTH: i64 = 43_200;

/// Describe the distance between two instants in words.
fn distance_in_words(date: &NaiveDateTime, now: &NaiveDateTime) -> String {
    let (earlier, later) = if date <= now { (date, now) } else { (now, date) };
    let seconds = (*later - *earlier).num_seconds();
    let minutes = divide_rounded(seconds, 60);

    if minutes < 1 {
        "1 dakikadan az".to_string()
    } else if minutes < 45 {
        format!("{} dakika", minutes)
    } else if minutes < 90 {
        "1 saat".to_string()
    } else if minutes < MINUTES_IN_DAY {
        format!("{} saat", divide_rounded(minutes, 60))
    } else if minutes < 2520 {
        "1 gün".to_string()
    } else if minutes < MINUTES_IN_MONTH {
        format!("{} gün", divide_rounded(minutes, MINUTES_IN_DAY))
    } else if minutes < 2 * MINUTES_IN_MONTH {
        format!("{} ay", divide_rounded(minutes, MINUTES_IN_MONTH))
    } else {
        let months = months_between(earlier, later);
        if months < 12 {
            return format!("{} ay", divide_rounded(minutes, MINUTES_IN_MONTH));
        }
        let years = months / 12;
        match months % 12 {
            0..=2 => format!("{} yıl", years),
            3..=8 => format!("{} yıldan fazla", years),
            _ => format!("neredeyse {} yıl", years + 1),
        }
    }
}

impl Formatter {
    /// Render a date with the given pattern.
    pub fn try_format_date<D: DateSource + ?Sized>(&self, date: &D, pattern: &str) -> Result<String> {
        let datetime = date.to_local()?;
        render_pattern(&datetime, pattern)
    }

    /// Render a date with the configured date pattern.
    pub fn format_date<D: DateSource + ?Sized>(&self, date: &D) -> String {
        self.format_date_with(date, &self.config.date_pattern)
    }

    /// Render a date with a custom pattern, degrading to the placeholder.
    pub fn format_date_with<D: DateSource + ?Sized>(&self, date: &D, pattern: &str) -> String {
        self.or_placeholder(self.try_format_date(date, pattern))
    }

    /// Render a date with the configured date-time pattern.
    pub fn format_date_time<D: DateSource + ?Sized>(&self, date: &D) -> String {
        self.format_date_with(date, &self.config.date_time_pattern)
    }

    /// Describe `date` relative to `now`, e.g. `2 saat önce` or `3 gün sonra`.
    pub fn try_format_relative_time_from<D: DateSource + ?Sized>(
        &self,
        date: &D,
        now: &NaiveDateTime,
    ) -> Result<String> {
        let datetime = date.to_local()?;
        let suffix = if datetime > *now { "sonra" } else { "önce" };
        Ok(format!("{} {}", distance_in_words(&datetime, now), suffix))
    }

    /// Describe `date` relative to `now`, degrading to the placeholder.
    pub fn format_relative_time_from<D: DateSource + ?Sized>(
        &self,
        date: &D,
        now: &NaiveDateTime,
    ) -> String {
        self.or_placeholder(self.try_format_relative_time_from(date, now))
    }

    /// Describe `date` relative to the current local time.
    pub fn format_relative_time<D: DateSource + ?Sized>(&self, date: &D) -> String {
        self.format_relative_time_from(date, &Local::now().naive_local())
    }
}
