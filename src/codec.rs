// Pure encode/decode over the reference alphabet.
//
// Ciphertext layout: the offset symbol followed by the substituted input,
// one output symbol per input symbol. Encoding moves each alphabet symbol
// back by the offset index, decoding moves it forward again. Symbols outside
// the alphabet are copied unchanged in both directions.

use log::{trace, warn};

use crate::alphabet;
use crate::error::CipherError;
use crate::key::OffsetKey;

// ---------------------------------------------------------------------------
// Decoded
// ---------------------------------------------------------------------------

/// Result of decoding a ciphertext.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decoded {
    /// The recovered plaintext.
    pub plaintext: String,
    /// The key symbol read from the front of the ciphertext, or `None` when
    /// the ciphertext was empty. It may lie outside the reference alphabet
    /// when decoding with [`decode`].
    pub key: Option<char>,
}

impl Decoded {
    /// Validate the recovered key symbol.
    ///
    /// Returns `Ok(None)` for empty ciphertext and an error when the key
    /// symbol is not in the reference alphabet.
    pub fn offset_key(&self) -> Result<Option<OffsetKey>, CipherError> {
        self.key.map(OffsetKey::new).transpose()
    }
}

// ---------------------------------------------------------------------------
// Encode
// ---------------------------------------------------------------------------

/// Encode `plain` under `key`.
///
/// Empty input yields empty output, with no key prefix.
pub fn encode(key: OffsetKey, plain: &str) -> String {
    encode_raw(key.symbol(), plain)
}

/// Encode with an unvalidated offset symbol. A symbol outside the alphabet
/// carries the [`alphabet::NOT_FOUND`] shift.
pub(crate) fn encode_raw(offset_char: char, plain: &str) -> String {
    if plain.is_empty() {
        return String::new();
    }

    let shift = alphabet::shift_of(offset_char);
    let mut out = String::with_capacity(plain.len() + offset_char.len_utf8());
    out.push(offset_char);
    out.extend(plain.chars().map(|c| alphabet::rotate(c, -shift)));

    trace!(
        "encoded {} bytes with offset {offset_char:?} (shift {shift})",
        plain.len()
    );
    out
}

// ---------------------------------------------------------------------------
// Decode
// ---------------------------------------------------------------------------

/// Decode `encoded`, reading the offset key from its first symbol.
///
/// Never fails. When the key symbol is outside the reference alphabet, the
/// [`alphabet::NOT_FOUND`] sentinel is used as the shift, so each alphabet
/// symbol moves back by one place (`A` wraps to `/`).
pub fn decode(encoded: &str) -> Decoded {
    let mut chars = encoded.chars();
    let Some(key) = chars.next() else {
        return Decoded::default();
    };

    let shift = alphabet::shift_of(key);
    if shift == alphabet::NOT_FOUND {
        warn!("key symbol {key:?} is not in the reference alphabet; decoding with sentinel shift");
    }

    let plaintext: String = chars.map(|c| alphabet::rotate(c, shift)).collect();
    trace!(
        "decoded {} bytes with offset {key:?} (shift {shift})",
        plaintext.len()
    );

    Decoded {
        plaintext,
        key: Some(key),
    }
}

/// Decode `encoded`, rejecting a key symbol outside the reference alphabet.
///
/// Empty input still decodes to an empty [`Decoded`].
pub fn decode_strict(encoded: &str) -> Result<Decoded, CipherError> {
    if let Some(key) = encoded.chars().next() {
        OffsetKey::new(key)?;
    }
    Ok(decode(encoded))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: char) -> OffsetKey {
        OffsetKey::new(c).unwrap()
    }

    #[test]
    fn encode_single_symbol_wraps() {
        assert_eq!(encode(key('B'), "A"), "B/");
    }

    #[test]
    fn encode_mixed_input() {
        assert_eq!(encode(key('B'), "RQPp"), "BQPOp");
    }

    #[test]
    fn encode_empty_has_no_prefix() {
        assert_eq!(encode(key('Z'), ""), "");
    }

    #[test]
    fn encode_with_zero_shift_only_prefixes() {
        assert_eq!(encode(key('A'), "HELLO world"), "AHELLO world");
    }

    #[test]
    fn decode_reads_key_from_first_symbol() {
        let out = decode("XAB");
        assert_eq!(out.plaintext, "XY");
        assert_eq!(out.key, Some('X'));
        assert_eq!(out.offset_key().unwrap(), Some(key('X')));
    }

    #[test]
    fn decode_empty() {
        let out = decode("");
        assert_eq!(out, Decoded::default());
        assert_eq!(out.offset_key().unwrap(), None);
    }

    #[test]
    fn decode_key_only() {
        let out = decode("Q");
        assert_eq!(out.plaintext, "");
        assert_eq!(out.key, Some('Q'));
    }

    #[test]
    fn decode_foreign_key_uses_sentinel_shift() {
        let out = decode("!ABC/x");
        assert_eq!(out.plaintext, "/AB.x");
        assert_eq!(out.key, Some('!'));
        assert_eq!(
            out.offset_key(),
            Err(CipherError::InvalidOffsetCharacter('!'))
        );
    }

    #[test]
    fn decode_strict_rejects_foreign_key() {
        assert_eq!(
            decode_strict("aBC"),
            Err(CipherError::InvalidOffsetCharacter('a'))
        );
        assert_eq!(decode_strict("").unwrap(), Decoded::default());
        assert_eq!(decode_strict("XAB").unwrap().plaintext, "XY");
    }

    #[test]
    fn roundtrip_every_key() {
        let plain = "THE QUICK BROWN FOX (1+2)*3-4.5/6 jumps!";
        for k in OffsetKey::all() {
            let encoded = encode(k, plain);
            let decoded = decode(&encoded);
            assert_eq!(decoded.plaintext, plain, "key {k}");
            assert_eq!(decoded.key, Some(k.symbol()));
        }
    }

    #[test]
    fn non_ascii_passes_through() {
        let encoded = encode(key('C'), "Ωé日A");
        assert_eq!(encoded, "CΩé日.");
        assert_eq!(decode(&encoded).plaintext, "Ωé日A");
    }
}
