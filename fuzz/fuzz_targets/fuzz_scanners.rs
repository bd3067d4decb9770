#![no_main]

use arbitrary::Arbitrary;
use base64::{Engine, engine::general_purpose::STANDARD};
use bytescan::{
    DataUriError, check_scan_invariants, decode_data_uri, lex_number, match_quote_entity,
    scan_number,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Input<'a> {
    /// Raw bytes probed with every primitive at every offset.
    Raw(&'a [u8]),
    /// A base64 payload wrapped in a `data:` URI; must round-trip.
    Base64 { media_type: &'a [u8], payload: &'a [u8] },
}

fn probe_every_offset(data: &[u8]) {
    for i in 0..data.len() {
        let rest = &data[i..];

        assert!(check_scan_invariants(rest), "scan invariants broken on {rest:?}");
        if let Some(lexeme) = lex_number(rest) {
            assert_eq!(Some(lexeme.len()), scan_number(rest));
        }

        if let Some(entity) = match_quote_entity(rest) {
            assert!(entity.len >= 5 && entity.len <= rest.len());
            assert_eq!(rest[0], b'&');
            assert_eq!(rest[entity.len - 1], b';');
        }
    }

    match decode_data_uri(data) {
        Ok(uri) => {
            assert!(data.starts_with(b"data:"));
            assert!(!uri.media_type.is_empty());
        }
        Err(DataUriError::NotDataUri | DataUriError::Base64(_)) => {}
    }
}

fuzz_target!(|input: Input<'_>| {
    match input {
        Input::Raw(data) => probe_every_offset(data),
        Input::Base64 { media_type, payload } => {
            // keep the header free of delimiters and of a stray `base64` token
            if media_type.iter().any(|c| !c.is_ascii_lowercase() && *c != b'/') {
                return;
            }
            let mut uri = b"data:".to_vec();
            uri.extend_from_slice(media_type);
            uri.extend_from_slice(b";base64,");
            uri.extend_from_slice(STANDARD.encode(payload).as_bytes());

            let decoded = decode_data_uri(&uri).expect("encoded payload must decode");
            assert_eq!(&*decoded.data, payload);
            if !media_type.is_empty() {
                assert_eq!(&*decoded.media_type, media_type);
            }
        }
    }
});
