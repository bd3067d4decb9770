//! Byte-level lexical primitives for minifiers and tokenizers.
//!
//! Three independent recognizers that operate on raw byte windows owned by the
//! caller:
//!
//! - [`scan_number`] finds the longest numeric-literal prefix,
//! - [`decode_data_uri`] splits a `data:` URI into media type and payload,
//! - [`match_quote_entity`] recognizes `&quot;`, `&apos;` and their numeric
//!   forms.
//!
//! None of them keep state between calls, and none of them panic on any input.
//! A tokenizer can probe every byte position in a tight loop and treat a
//! `None` as "not here".
//!
//! ```rust
//! use bytescan::{Quote, decode_data_uri, match_quote_entity, scan_number};
//!
//! assert_eq!(scan_number(b"1.5em"), Some(3));
//! assert_eq!(scan_number(b"1.foo"), Some(1));
//!
//! let uri = decode_data_uri(b"data:,hello%20world").unwrap();
//! assert_eq!(&*uri.media_type, b"text/plain");
//! assert_eq!(&*uri.data, b"hello world");
//!
//! let entity = match_quote_entity(b"&#x27;s").unwrap();
//! assert_eq!(entity.quote, Quote::Single);
//! assert_eq!(entity.len, 6);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod bytes;
mod data_uri;
mod entity;
mod error;
mod number;
mod unescape;

#[cfg(test)]
mod tests;

pub use data_uri::{DataUri, decode_data_uri};
pub use entity::{Quote, QuoteEntity, match_quote_entity};
pub use error::{DataUriError, UnescapeError};
pub use number::{NumberLexeme, lex_number, scan_number};
pub use unescape::query_unescape;

#[cfg(any(test, feature = "fuzzing"))]
#[doc(hidden)]
pub use number::check_scan_invariants;
