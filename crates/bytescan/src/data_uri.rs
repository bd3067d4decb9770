//! `data:` URI decoding.
//!
//! The header between `data:` and the first `,` is read in one forward pass.
//! Each `;`, `=` or `,` closes a segment; trimmed segments are appended to the
//! media type together with their delimiter, except for a `base64` segment,
//! which switches the payload decoding and drops the `;` in front of it.

use alloc::{borrow::Cow, vec::Vec};
use core::fmt;

use base64::{
    Engine, alphabet,
    engine::{GeneralPurpose, GeneralPurposeConfig},
};
use bstr::BStr;

use crate::{
    bytes::{equal_case_insensitive, trim_whitespace},
    error::DataUriError,
    unescape::query_unescape,
};

const DEFAULT_MEDIA_TYPE: &[u8] = b"text/plain";

/// Standard alphabet with required padding. Non-zero trailing bits are
/// accepted.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// A decoded `data:` URI.
#[derive(Clone, PartialEq, Eq)]
pub struct DataUri<'a> {
    /// Media type with parameters, e.g. `text/plain;charset=utf-8`. Defaults
    /// to `text/plain` when the header names none.
    pub media_type: Cow<'a, [u8]>,
    /// Decoded payload. Borrowed from the input when no decoding was needed
    /// or when percent-decoding failed.
    pub data: Cow<'a, [u8]>,
}

impl DataUri<'_> {
    /// Detaches the decoded URI from the input buffer.
    pub fn into_owned(self) -> DataUri<'static> {
        DataUri {
            media_type: Cow::Owned(self.media_type.into_owned()),
            data: Cow::Owned(self.data.into_owned()),
        }
    }
}

impl fmt::Debug for DataUri<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataUri")
            .field("media_type", &BStr::new(&self.media_type))
            .field("data", &BStr::new(&self.data))
            .finish()
    }
}

/// Splits a `data:` URI into its media type and decoded payload.
///
/// The payload is base64-decoded when the header carries a `base64` token
/// (compared case-insensitively) and percent-decoded otherwise. A payload that
/// fails to percent-decode is returned as-is.
///
/// # Errors
///
/// - [`DataUriError::NotDataUri`] if `uri` does not start with `data:`
///   followed by a header that ends in `,`.
/// - [`DataUriError::Base64`] if the payload is declared base64 but does not
///   decode.
///
/// ```rust
/// use bytescan::decode_data_uri;
///
/// let uri = decode_data_uri(b"data:text/plain;base64,aGVsbG8=").unwrap();
/// assert_eq!(&*uri.media_type, b"text/plain");
/// assert_eq!(&*uri.data, b"hello");
/// ```
pub fn decode_data_uri(uri: &[u8]) -> Result<DataUri<'_>, DataUriError> {
    let rest = match uri.strip_prefix(b"data:") {
        Some(rest) if !rest.is_empty() => rest,
        _ => return Err(DataUriError::NotDataUri),
    };

    let mut media_type = Vec::new();
    let mut is_base64 = false;
    let mut start = 0;
    for (j, &c) in rest.iter().enumerate() {
        if !matches!(c, b'=' | b';' | b',') {
            continue;
        }
        let segment = trim_whitespace(&rest[start..j]);
        if c != b'=' && equal_case_insensitive(segment, b"base64") {
            media_type.pop();
            is_base64 = true;
            // the delimiter stays in the next segment
            start = j;
        } else if c == b',' {
            media_type.extend_from_slice(segment);
        } else {
            media_type.extend_from_slice(segment);
            media_type.push(c);
            start = j + 1;
        }

        if c == b',' {
            let media_type = if media_type.first().is_none_or(|&b| b == b';') {
                Cow::Borrowed(DEFAULT_MEDIA_TYPE)
            } else {
                Cow::Owned(media_type)
            };
            let payload = &rest[j + 1..];
            let data = if is_base64 {
                Cow::Owned(decode_base64(payload)?)
            } else {
                decode_percent_lenient(payload)
            };
            return Ok(DataUri { media_type, data });
        }
    }
    Err(DataUriError::NotDataUri)
}

/// Decodes a base64 payload, skipping line breaks.
fn decode_base64(payload: &[u8]) -> Result<Vec<u8>, DataUriError> {
    if payload.iter().any(|&c| c == b'\r' || c == b'\n') {
        let joined: Vec<u8> = payload
            .iter()
            .copied()
            .filter(|&c| c != b'\r' && c != b'\n')
            .collect();
        Ok(PAYLOAD_ENGINE.decode(joined)?)
    } else {
        Ok(PAYLOAD_ENGINE.decode(payload)?)
    }
}

/// Percent-decodes a payload, keeping the raw bytes when decoding fails.
fn decode_percent_lenient(payload: &[u8]) -> Cow<'_, [u8]> {
    if !payload.iter().any(|&c| c == b'%' || c == b'+') {
        return Cow::Borrowed(payload);
    }
    match query_unescape(payload) {
        Ok(decoded) => Cow::Owned(decoded),
        Err(_) => Cow::Borrowed(payload),
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, string::ToString};

    use rstest::rstest;

    use super::*;

    fn decode(uri: &[u8]) -> (Vec<u8>, Vec<u8>) {
        let DataUri { media_type, data } = decode_data_uri(uri).unwrap();
        (media_type.into_owned(), data.into_owned())
    }

    #[rstest]
    #[case(b"data:text/plain;base64,aGVsbG8=", b"text/plain", b"hello")]
    #[case(b"data:,hello%20world", b"text/plain", b"hello world")]
    #[case(b"data:,", b"text/plain", b"")]
    #[case(b"data:;base64,", b"text/plain", b"")]
    #[case(b"data:base64,aGk=", b"text/plain", b"hi")]
    #[case(b"data:;BASE64,aGk=", b"text/plain", b"hi")]
    #[case(b"data:image/svg+xml,<svg/>", b"image/svg+xml", b"<svg/>")]
    #[case(b"data:text/html;charset=utf-8,a+b", b"text/html;charset=utf-8", b"a b")]
    #[case(b"data:;charset=utf-8,x", b"text/plain", b"x")]
    #[case(b"data: text/css ; charset = ascii ,x", b"text/css;charset=ascii", b"x")]
    #[case(b"data:text/plain; base64 ,aGk=", b"text/plain", b"hi")]
    #[case(b"data:a/b;base64;x=y,aGk=", b"a/b;x=y", b"hi")]
    #[case(b"data:a=base64,", b"a", b"")]
    #[case(b"data:text/plain,a,b%2Cc", b"text/plain", b"a,b,c")]
    #[case(b"data:,100%", b"text/plain", b"100%")]
    #[case(b"data:,%zz+", b"text/plain", b"%zz+")]
    #[case(b"data:,aGk=", b"text/plain", b"aGk=")]
    #[case(b"data:x;base64,aGVs\r\nbG8=", b"x", b"hello")]
    fn decodes(#[case] uri: &[u8], #[case] media_type: &[u8], #[case] data: &[u8]) {
        let (got_media_type, got_data) = decode(uri);
        assert_eq!(BStr::new(&got_media_type), BStr::new(media_type));
        assert_eq!(BStr::new(&got_data), BStr::new(data));
    }

    #[rstest]
    #[case(b"")]
    #[case(b"not-a-uri")]
    #[case(b"data:")]
    #[case(b"data")]
    #[case(b"DATA:,x")]
    #[case(b" data:,x")]
    #[case(b"data:text/plain")]
    #[case(b"data:text/plain;base64")]
    fn rejects_non_data_uris(#[case] uri: &[u8]) {
        assert_eq!(decode_data_uri(uri), Err(DataUriError::NotDataUri));
    }

    #[rstest]
    #[case(b"data:;base64,aGVsbG8")]
    #[case(b"data:;base64,a")]
    #[case(b"data:;base64,aGV%bG8=")]
    #[case(b"data:;base64,aGVs bG8=")]
    fn surfaces_base64_errors(#[case] uri: &[u8]) {
        assert!(matches!(decode_data_uri(uri), Err(DataUriError::Base64(_))));
    }

    #[test]
    fn borrows_payload_when_nothing_to_decode() {
        let uri = decode_data_uri(b"data:text/plain,abc").unwrap();
        assert!(matches!(uri.data, Cow::Borrowed(b"abc")));
        let uri = decode_data_uri(b"data:,50%").unwrap();
        assert!(matches!(uri.data, Cow::Borrowed(b"50%")));
        let uri = decode_data_uri(b"data:,a%20b").unwrap();
        assert!(matches!(uri.data, Cow::Owned(_)));
    }

    #[test]
    fn default_media_type_is_static() {
        let uri = decode_data_uri(b"data:,").unwrap();
        assert!(matches!(uri.media_type, Cow::Borrowed(b) if b == DEFAULT_MEDIA_TYPE));
    }

    #[test]
    fn into_owned_detaches_from_input() {
        let owned = {
            let input = Vec::from(&b"data:text/plain,abc"[..]);
            decode_data_uri(&input).unwrap().into_owned()
        };
        assert_eq!(&*owned.data, b"abc");
    }

    #[test]
    fn debug_and_display() {
        let uri = decode_data_uri(b"data:text/plain,abc").unwrap();
        assert_eq!(
            format!("{uri:?}"),
            "DataUri { media_type: \"text/plain\", data: \"abc\" }"
        );
        assert_eq!(DataUriError::NotDataUri.to_string(), "not a data URI");
        let err = decode_data_uri(b"data:;base64,a").unwrap_err();
        assert!(err.to_string().starts_with("invalid base64 payload: "));
    }
}
