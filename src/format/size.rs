//! File size formatting.

use super::Formatter;
use crate::locale::{format_decimal, trim_fraction};

const SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

impl Formatter {
    /// Format a byte count in base-1024 units with at most two fraction
    /// digits, e.g. `1 KB`, `1,5 MB`.
    pub fn format_file_size(&self, bytes: u64) -> String {
        if bytes == 0 {
            return "0 Bytes".to_string();
        }

        let mut exponent = 0;
        while exponent + 1 < SIZE_UNITS.len() && bytes >= 1u64 << (10 * (exponent + 1)) {
            exponent += 1;
        }

        let mut value = bytes as f64 / (1u64 << (10 * exponent)) as f64;
        if (value * 100.0).round() / 100.0 >= 1024.0 && exponent + 1 < SIZE_UNITS.len() {
            exponent += 1;
            value = bytes as f64 / (1u64 << (10 * exponent)) as f64;
        }

        let digits = trim_fraction(&format_decimal(value, 2, false));
        format!("{} {}", digits, SIZE_UNITS[exponent])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_units() {
        let f = Formatter::default();
        assert_eq!(f.format_file_size(0), "0 Bytes");
        assert_eq!(f.format_file_size(1), "1 Bytes");
        assert_eq!(f.format_file_size(1024), "1 KB");
        assert_eq!(f.format_file_size(1_048_576), "1 MB");
        assert_eq!(f.format_file_size(1_073_741_824), "1 GB");
        assert_eq!(f.format_file_size(1_099_511_627_776), "1 TB");
    }

    #[test]
    fn test_fractions() {
        let f = Formatter::default();
        assert_eq!(f.format_file_size(512), "512 Bytes");
        assert_eq!(f.format_file_size(1536), "1,5 KB");
        assert_eq!(f.format_file_size(1_288_490), "1,23 MB");
    }

    #[test]
    fn test_promotes_when_rounding_reaches_next_unit() {
        let f = Formatter::default();
        assert_eq!(f.format_file_size(1_048_575), "1 MB");
        assert_eq!(f.format_file_size(1023), "1023 Bytes");
        assert_eq!(f.format_file_size(1_048_000), "1023,44 KB");
    }

    #[test]
    fn test_caps_at_terabytes() {
        let f = Formatter::default();
        assert_eq!(f.format_file_size(1u64 << 50), "1024 TB");
    }
}
