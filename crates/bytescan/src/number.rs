//! Numeric-literal prefix scanning.
//!
//! The accepted grammar is
//!
//! ```text
//! number   = sign? ( digits fraction? | fraction ) exponent?
//! sign     = '+' | '-'
//! digits   = [0-9]+
//! fraction = '.' digits
//! exponent = ( 'e' | 'E' ) sign? digits
//! ```
//!
//! The scanner reports the longest prefix of its input that matches, with two
//! lookahead rules: a `.` that follows digits but is not itself followed by a
//! digit is left for the next token (`1.foo` scans as `1`), and an exponent
//! marker without digits is left as well (`1em` scans as `1`).

use core::fmt;

use bstr::BStr;

#[inline]
fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Advances `i` past a run of ASCII digits in `b`.
#[inline]
fn skip_digits(b: &[u8], mut i: usize) -> usize {
    while i < b.len() && is_digit(b[i]) {
        i += 1;
    }
    i
}

/// Returns the length of the longest numeric-literal prefix of `b`, or `None`
/// when `b` does not start with a number.
///
/// A returned length is never zero and never exceeds `b.len()`.
///
/// ```rust
/// use bytescan::scan_number;
///
/// assert_eq!(scan_number(b"-12.5e+3px"), Some(8));
/// assert_eq!(scan_number(b"1.x"), Some(1));
/// assert_eq!(scan_number(b"1e"), Some(1));
/// assert_eq!(scan_number(b".5"), Some(2));
/// assert_eq!(scan_number(b"."), None);
/// assert_eq!(scan_number(b"+"), None);
/// ```
pub fn scan_number(b: &[u8]) -> Option<usize> {
    let mut i = 0;
    if i >= b.len() {
        return None;
    }
    if b[i] == b'+' || b[i] == b'-' {
        i += 1;
        if i >= b.len() {
            return None;
        }
    }

    let int_digits = is_digit(b[i]);
    if int_digits {
        i = skip_digits(b, i + 1);
    }

    if i < b.len() && b[i] == b'.' {
        if i + 1 < b.len() && is_digit(b[i + 1]) {
            i = skip_digits(b, i + 2);
        } else if int_digits {
            // the dot may start the next token
            return Some(i);
        } else {
            return None;
        }
    } else if !int_digits {
        return None;
    }

    let mantissa_end = i;
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        i += 1;
        if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
            i += 1;
        }
        if i >= b.len() || !is_digit(b[i]) {
            // the marker may start an identifier (`1em`)
            return Some(mantissa_end);
        }
        i = skip_digits(b, i);
    }
    Some(i)
}

/// A scanned numeric literal, tagged by whether it needs a float conversion.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum NumberLexeme<'a> {
    /// No `.` and no exponent was consumed.
    Integer(&'a [u8]),
    /// A fraction or an exponent was consumed.
    Float(&'a [u8]),
}

impl<'a> NumberLexeme<'a> {
    /// The literal bytes, including any sign.
    pub fn as_bytes(&self) -> &'a [u8] {
        match *self {
            NumberLexeme::Integer(b) | NumberLexeme::Float(b) => b,
        }
    }

    /// Length of the literal in bytes.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Always `false`; a lexeme holds at least one digit.
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

impl fmt::Debug for NumberLexeme<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberLexeme::Integer(b) => f.debug_tuple("Integer").field(&BStr::new(b)).finish(),
            NumberLexeme::Float(b) => f.debug_tuple("Float").field(&BStr::new(b)).finish(),
        }
    }
}

/// Scans a numeric prefix of `b` like [`scan_number`] and classifies it.
///
/// ```rust
/// use bytescan::{NumberLexeme, lex_number};
///
/// assert_eq!(lex_number(b"42;"), Some(NumberLexeme::Integer(b"42")));
/// assert_eq!(lex_number(b"4.2;"), Some(NumberLexeme::Float(b"4.2")));
/// assert_eq!(lex_number(b"4e2;"), Some(NumberLexeme::Float(b"4e2")));
/// assert_eq!(lex_number(b"4em"), Some(NumberLexeme::Integer(b"4")));
/// ```
pub fn lex_number(b: &[u8]) -> Option<NumberLexeme<'_>> {
    let n = scan_number(b)?;
    let lexeme = &b[..n];
    // a sign only appears first, so any '.', 'e' or 'E' past it is structural
    if lexeme.iter().any(|&c| matches!(c, b'.' | b'e' | b'E')) {
        Some(NumberLexeme::Float(lexeme))
    } else {
        Some(NumberLexeme::Integer(lexeme))
    }
}

/// Checks the scanner contract on `b`: the boundary stays in bounds, is
/// non-zero, and rescanning the matched prefix yields the same boundary.
#[cfg(any(test, feature = "fuzzing"))]
pub fn check_scan_invariants(b: &[u8]) -> bool {
    match scan_number(b) {
        None => true,
        Some(n) => n > 0 && n <= b.len() && scan_number(&b[..n]) == Some(n),
    }
}
