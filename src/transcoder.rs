// Stateful transcoder.
//
// Transcoder keeps a current offset character between calls:
//   - `set_offset_char` replaces it after validation
//   - `encode` reads it and writes it as the ciphertext prefix
//   - `decode` overwrites it with the key symbol of the ciphertext
//
// A Transcoder is not shared state: `decode` takes `&mut self`, so callers
// that need one instance across threads must wrap it in a lock.

use log::debug;

use crate::codec;
use crate::error::CipherError;
use crate::key::{DEFAULT_OFFSET_CHAR, OffsetKey};

/// Offset-keyed substitution transcoder with a remembered offset character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcoder {
    offset_char: char,
}

impl Transcoder {
    /// Create a transcoder with the default offset character (`'B'`).
    pub fn new() -> Self {
        Self {
            offset_char: DEFAULT_OFFSET_CHAR,
        }
    }

    /// Create a transcoder starting from `key`.
    pub fn with_key(key: OffsetKey) -> Self {
        Self {
            offset_char: key.symbol(),
        }
    }

    /// The current offset character.
    ///
    /// Normally an alphabet member; after decoding ciphertext whose key
    /// symbol is foreign, it holds that foreign symbol.
    pub fn offset_char(&self) -> char {
        self.offset_char
    }

    /// Replace the offset character.
    ///
    /// Fails with [`CipherError::InvalidOffsetCharacter`] if `candidate` is
    /// not in the reference alphabet, leaving the current value untouched.
    pub fn set_offset_char(&mut self, candidate: char) -> Result<(), CipherError> {
        let key = OffsetKey::new(candidate)?;
        if key.symbol() != self.offset_char {
            debug!("offset character {:?} -> {:?}", self.offset_char, key.symbol());
        }
        self.offset_char = key.symbol();
        Ok(())
    }

    /// Encode `plain` under the current offset character.
    ///
    /// The result starts with the offset character, unless `plain` is empty,
    /// in which case the result is empty too.
    pub fn encode(&self, plain: &str) -> String {
        codec::encode_raw(self.offset_char, plain)
    }

    /// Decode `encoded` and adopt its key symbol as the current offset
    /// character.
    ///
    /// The key symbol is adopted even when it is outside the reference
    /// alphabet. Empty input decodes to an empty string and keeps the
    /// current offset character.
    pub fn decode(&mut self, encoded: &str) -> String {
        let decoded = codec::decode(encoded);
        if let Some(key) = decoded.key {
            if key != self.offset_char {
                debug!("decode adopted offset character {:?} (was {:?})", key, self.offset_char);
            }
            self.offset_char = key;
        }
        decoded.plaintext
    }
}

impl Default for Transcoder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
