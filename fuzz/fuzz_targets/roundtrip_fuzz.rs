#![no_main]
use keyshift::alphabet::{self, ALPHABET_LEN};
use keyshift::{OffsetKey, codec};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // First byte picks the key.
    let key = OffsetKey::new(alphabet::symbol_at(data[0] as usize % ALPHABET_LEN)).unwrap();
    let Ok(plain) = std::str::from_utf8(&data[1..]) else {
        return;
    };

    let encoded = codec::encode(key, plain);
    let decoded = codec::decode(&encoded);
    assert_eq!(decoded.plaintext, plain);
    assert_eq!(decoded.key, Some(key.symbol()));
});
