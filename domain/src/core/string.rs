//! String utilities for the domain layer.

/// Truncate a string to at most `max_chars` characters, appending `…`
/// when something was cut. Counts `char`s, so CJK text is never split
/// inside a code point.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}
