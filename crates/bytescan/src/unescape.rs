//! Percent-decoding with URL query-component semantics.
//!
//! `+` decodes to a space and `%XY` decodes to the byte `0xXY`. Every other
//! byte passes through untouched, including bytes that are not valid UTF-8.

use alloc::vec::Vec;

use crate::error::UnescapeError;

/// Convert a single ASCII hex digit into its 0..=15 value.
#[inline]
fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Decodes `%XY` escapes and `+` in `s`.
///
/// # Errors
///
/// - [`UnescapeError::TruncatedEscape`] if a `%` has fewer than two bytes
///   after it.
/// - [`UnescapeError::InvalidEscape`] if either of the two bytes after a `%`
///   is not a hex digit.
///
/// ```rust
/// use bytescan::{UnescapeError, query_unescape};
///
/// assert_eq!(query_unescape(b"a+b%3Dc").unwrap(), b"a b=c");
/// assert_eq!(
///     query_unescape(b"100%"),
///     Err(UnescapeError::TruncatedEscape { offset: 3 })
/// );
/// ```
pub fn query_unescape(s: &[u8]) -> Result<Vec<u8>, UnescapeError> {
    let mut out = Vec::with_capacity(s.len());
    let mut i = 0;
    while i < s.len() {
        match s[i] {
            b'%' => {
                if i + 2 >= s.len() {
                    return Err(UnescapeError::TruncatedEscape { offset: i });
                }
                let (Some(hi), Some(lo)) = (hex_val(s[i + 1]), hex_val(s[i + 2])) else {
                    return Err(UnescapeError::InvalidEscape { offset: i });
                };
                out.push((hi << 4) | lo);
                i += 3;
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    Ok(out)
}
