//! Shared utility functions.

/// Truncate a string to at most `max_chars` characters.
///
/// Counts Unicode scalar values, not bytes, so the cut never lands inside a
/// multi-byte character. Returns a sub-slice of the original string.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
