//! Small byte-slice helpers shared by the recognizers.
//!
//! All of them work on `&[u8]` in place; nothing here allocates.

/// Returns `true` for the ASCII whitespace bytes a tokenizer skips between
/// tokens: space, tab, line feed, carriage return and form feed.
#[inline]
pub const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0C')
}

/// Returns `b` without leading and trailing [`is_whitespace`] bytes.
pub fn trim_whitespace(b: &[u8]) -> &[u8] {
    let start = b.iter().position(|&c| !is_whitespace(c)).unwrap_or(b.len());
    let end = b
        .iter()
        .rposition(|&c| !is_whitespace(c))
        .map_or(start, |i| i + 1);
    &b[start..end]
}

/// Compares `s` against an all-lowercase ASCII `target_lower`, ignoring the
/// case of `s`.
///
/// Only `s` is folded: an uppercase byte in `target_lower` never matches.
pub fn equal_case_insensitive(s: &[u8], target_lower: &[u8]) -> bool {
    if s.len() != target_lower.len() {
        return false;
    }
    s.iter()
        .zip(target_lower)
        .all(|(&d, &c)| d == c || (d.is_ascii_uppercase() && d + (b'a' - b'A') == c))
}
