use thiserror::Error;

/// Failure to decode a `data:` URI.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataUriError {
    /// The input lacks the `data:` prefix or the `,` that ends the header.
    #[error("not a data URI")]
    NotDataUri,
    /// The header declared `base64` but the payload did not decode.
    #[error("invalid base64 payload: {0}")]
    Base64(base64::DecodeError),
}

// Not `#[from]`: that implies `#[source]`, and `base64::DecodeError` only
// implements `Error` with base64's `std` feature.
impl From<base64::DecodeError> for DataUriError {
    fn from(err: base64::DecodeError) -> Self {
        DataUriError::Base64(err)
    }
}

/// Failure to percent-decode a byte sequence with query semantics.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnescapeError {
    /// A `%` at `offset` is followed by a byte that is not a hex digit.
    #[error("invalid escape at offset {offset}")]
    InvalidEscape {
        /// Byte offset of the `%`.
        offset: usize,
    },
    /// A `%` at `offset` has fewer than two bytes after it.
    #[error("truncated escape at offset {offset}")]
    TruncatedEscape {
        /// Byte offset of the `%`.
        offset: usize,
    },
}
