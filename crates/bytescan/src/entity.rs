//! Quote-character entity references.
//!
//! Recognizes the references that decode to `"` or `'`:
//!
//! | reference                | decodes to |
//! |--------------------------|------------|
//! | `&quot;` (any case)      | `"`        |
//! | `&apos;` (any case)      | `'`        |
//! | `&#34;`, `&#x22;`        | `"`        |
//! | `&#39;`, `&#x27;`        | `'`        |
//!
//! Numeric forms may carry any number of leading zeros (`&#0034;`). The hex
//! marker must be a lowercase `x`.

use crate::bytes::equal_case_insensitive;

/// One of the two ASCII quote characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
pub enum Quote {
    /// `"`
    Double,
    /// `'`
    Single,
}

impl Quote {
    /// The quote as a byte.
    pub const fn as_byte(self) -> u8 {
        match self {
            Quote::Double => b'"',
            Quote::Single => b'\'',
        }
    }

    /// The quote as a `char`.
    pub const fn as_char(self) -> char {
        self.as_byte() as char
    }
}

/// A recognized quote entity at the start of a byte window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
pub struct QuoteEntity {
    /// The quote the entity decodes to.
    pub quote: Quote,
    /// Bytes consumed, including the leading `&` and the trailing `;`.
    pub len: usize,
}

/// Matches `<lead><double|single>;` at `b[i..]`, the first byte after the zero
/// padding of a numeric reference.
fn match_numeric_tail(
    b: &[u8],
    i: usize,
    lead: u8,
    double: u8,
    single: u8,
) -> Option<QuoteEntity> {
    if i + 2 >= b.len() || b[i] != lead || b[i + 2] != b';' {
        return None;
    }
    let quote = match b[i + 1] {
        c if c == double => Quote::Double,
        c if c == single => Quote::Single,
        _ => return None,
    };
    Some(QuoteEntity { quote, len: i + 3 })
}

/// Matches a quote entity reference at the start of `b`.
///
/// ```rust
/// use bytescan::{Quote, QuoteEntity, match_quote_entity};
///
/// assert_eq!(
///     match_quote_entity(b"&#34;rest"),
///     Some(QuoteEntity { quote: Quote::Double, len: 5 })
/// );
/// assert_eq!(
///     match_quote_entity(b"&APOS;"),
///     Some(QuoteEntity { quote: Quote::Single, len: 6 })
/// );
/// assert_eq!(match_quote_entity(b"&amp;"), None);
/// ```
pub fn match_quote_entity(b: &[u8]) -> Option<QuoteEntity> {
    if b.len() < 5 || b[0] != b'&' {
        return None;
    }

    if b[1] == b'#' {
        let (start, lead, double, single) = if b[2] == b'x' {
            (3, b'2', b'2', b'7')
        } else {
            (2, b'3', b'4', b'9')
        };
        let mut i = start;
        while i < b.len() && b[i] == b'0' {
            i += 1;
        }
        return match_numeric_tail(b, i, lead, double, single);
    }

    if b.len() >= 6 && b[5] == b';' {
        let name = &b[1..5];
        if equal_case_insensitive(name, b"quot") {
            return Some(QuoteEntity { quote: Quote::Double, len: 6 });
        }
        if equal_case_insensitive(name, b"apos") {
            return Some(QuoteEntity { quote: Quote::Single, len: 6 });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const fn entity(quote: Quote, len: usize) -> Option<QuoteEntity> {
        Some(QuoteEntity { quote, len })
    }

    #[rstest]
    #[case(b"&quot;", entity(Quote::Double, 6))]
    #[case(b"&QUOT;x", entity(Quote::Double, 6))]
    #[case(b"&Quot;", entity(Quote::Double, 6))]
    #[case(b"&apos;x", entity(Quote::Single, 6))]
    #[case(b"&aPoS;", entity(Quote::Single, 6))]
    #[case(b"&#34;rest", entity(Quote::Double, 5))]
    #[case(b"&#39;", entity(Quote::Single, 5))]
    #[case(b"&#0034;", entity(Quote::Double, 7))]
    #[case(b"&#00000039;;", entity(Quote::Single, 11))]
    #[case(b"&#x22;", entity(Quote::Double, 6))]
    #[case(b"&#x27;s", entity(Quote::Single, 6))]
    #[case(b"&#x0022;", entity(Quote::Double, 8))]
    fn matches_quote_entities(#[case] input: &[u8], #[case] expected: Option<QuoteEntity>) {
        assert_eq!(match_quote_entity(input), expected);
    }

    #[rstest]
    #[case(b"")]
    #[case(b"&")]
    #[case(b"&#34")]
    #[case(b"&quot")]
    #[case(b"&amp;")]
    #[case(b"&lt;xx")]
    #[case(b"&quo;x")]
    #[case(b"&quota;")]
    #[case(b" &quot;")]
    #[case(b"&#35;")]
    #[case(b"&#340;")]
    #[case(b"&#34x")]
    #[case(b"&#x23;")]
    #[case(b"&#X22;")]
    #[case(b"&#x2;;")]
    #[case(b"&#x34;")]
    #[case(b"&#22;;")]
    #[case(b"&#00000")]
    #[case(b"&#x0000")]
    fn rejects_everything_else(#[case] input: &[u8]) {
        assert_eq!(match_quote_entity(input), None);
    }

    #[test]
    fn quote_bytes() {
        assert_eq!(Quote::Double.as_byte(), b'"');
        assert_eq!(Quote::Single.as_char(), '\'');
    }
}
