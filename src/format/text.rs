//! String casing and truncation.

use crate::locale::capitalize;

/// Capitalize every space-separated word using Turkish casing rules.
pub fn to_title_case(s: &str) -> String {
    s.split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Cap `s` at `max_length` characters, appending `...` when cut.
pub fn truncate_string(s: &str, max_length: usize) -> String {
    match s.char_indices().nth(max_length) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
