//! Turkish calendar names and the date pattern renderer.
//!
//! Patterns use the date-fns token letters the app's screens were written
//! against (`dd.MM.yyyy`, `d MMMM yyyy EEEE`, `HH:mm`). Text inside single
//! quotes is copied verbatim and `''` yields an apostrophe.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::error::{FormatError, Result};

/// Month names, January first.
pub const MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

/// Abbreviated month names, January first.
pub const MONTHS_SHORT: [&str; 12] = [
    "Oca", "Şub", "Mar", "Nis", "May", "Haz", "Tem", "Ağu", "Eyl", "Eki", "Kas", "Ara",
];

/// Weekday names, Sunday first.
pub const WEEKDAYS: [&str; 7] = [
    "Pazar",
    "Pazartesi",
    "Salı",
    "Çarşamba",
    "Perşembe",
    "Cuma",
    "Cumartesi",
];

/// Abbreviated weekday names, Sunday first.
pub const WEEKDAYS_SHORT: [&str; 7] = ["Paz", "Pzt", "Sal", "Çar", "Per", "Cum", "Cts"];

/// Render a date-time with a date-fns style pattern.
pub fn render_pattern(datetime: &NaiveDateTime, pattern: &str) -> Result<String> {
    let mut result = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\'' {
            if chars.peek() == Some(&'\'') {
                chars.next();
                result.push('\'');
                continue;
            }
            loop {
                match chars.next() {
                    Some('\'') if chars.peek() == Some(&'\'') => {
                        chars.next();
                        result.push('\'');
                    },
                    Some('\'') => break,
                    Some(literal) => result.push(literal),
                    None => return Err(FormatError::UnterminatedLiteral),
                }
            }
        } else if c.is_ascii_alphabetic() {
            let mut width = 1;
            while chars.peek() == Some(&c) {
                chars.next();
                width += 1;
            }
            push_token(&mut result, datetime, c, width)?;
        } else {
            result.push(c);
        }
    }

    Ok(result)
}

fn push_token(out: &mut String, dt: &NaiveDateTime, letter: char, width: usize) -> Result<()> {
    let month = dt.month0() as usize;
    let weekday = dt.weekday().num_days_from_sunday() as usize;

    let text = match (letter, width) {
        ('y', 2) => format!("{:02}", dt.year().rem_euclid(100)),
        ('y', 1 | 3 | 4) => format!("{:0width$}", dt.year(), width = width),
        ('M', 1) => dt.month().to_string(),
        ('M', 2) => format!("{:02}", dt.month()),
        ('M', 3) => MONTHS_SHORT[month].to_string(),
        ('M', 4) => MONTHS[month].to_string(),
        ('d', 1) => dt.day().to_string(),
        ('d', 2) => format!("{:02}", dt.day()),
        ('E', 1..=3) => WEEKDAYS_SHORT[weekday].to_string(),
        ('E', 4) => WEEKDAYS[weekday].to_string(),
        ('H', 1) => dt.hour().to_string(),
        ('H', 2) => format!("{:02}", dt.hour()),
        ('m', 1) => dt.minute().to_string(),
        ('m', 2) => format!("{:02}", dt.minute()),
        ('s', 1) => dt.second().to_string(),
        ('s', 2) => format!("{:02}", dt.second()),
        _ => return Err(FormatError::unknown_token(letter.to_string().repeat(width))),
    };

    out.push_str(&text);
    Ok(())
}
