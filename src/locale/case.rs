//! Turkish letter casing.
//!
//! Turkish has dotted and dotless i as separate letters, so the default
//! Unicode mappings get `i`/`İ` and `ı`/`I` wrong.

/// Uppercase a single character.
pub fn to_upper_tr(c: char) -> String {
    match c {
        'i' => "İ".to_string(),
        'ı' => "I".to_string(),
        _ => c.to_uppercase().collect(),
    }
}

/// Lowercase a string.
pub fn to_lower_tr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'I' => result.push('ı'),
            'İ' => result.push('i'),
            _ => result.extend(c.to_lowercase()),
        }
    }
    result
}

/// Lowercase a word, then uppercase its first letter.
pub fn capitalize(word: &str) -> String {
    let lower = to_lower_tr(word);
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => {
            let mut result = to_upper_tr(first);
            result.push_str(chars.as_str());
            result
        },
        None => String::new(),
    }
}
