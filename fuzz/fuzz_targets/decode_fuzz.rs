#![no_main]
use keyshift::{Transcoder, codec};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Decoding is total: any text decodes, one output symbol per input
    // symbol after the key.
    let decoded = codec::decode(text);
    assert_eq!(
        decoded.plaintext.chars().count(),
        text.chars().count().saturating_sub(1)
    );

    let strict = codec::decode_strict(text);
    if let Ok(strict) = strict {
        assert_eq!(strict, decoded);
    }

    let mut t = Transcoder::new();
    assert_eq!(t.decode(text), decoded.plaintext);
});
