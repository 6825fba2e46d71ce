//! Keyshift: an offset-keyed substitution transcoder.
//!
//! Text is transcoded over a fixed reference alphabet
//! (`A-Z`, `0-9`, `( ) * + - . /`). Each alphabet symbol is shifted by the
//! index of an offset character, and the offset character is written as the
//! first symbol of the ciphertext so the key travels with the data. Symbols
//! outside the alphabet pass through unchanged.
//!
//! This is an obfuscation scheme, not encryption: anyone who knows the
//! alphabet can read the key off the first symbol.
//!
//! The crate provides:
//! - The reference alphabet and symbol lookup (`alphabet`)
//! - Pure encode/decode with an explicit key (`codec`, `key`)
//! - A stateful [`Transcoder`] that remembers its offset character
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use keyshift::{OffsetKey, Transcoder, codec};
//!
//! let key = OffsetKey::new('B').unwrap();
//! let encoded = codec::encode(key, "RQPp");
//! assert_eq!(encoded, "BQPOp");
//!
//! let decoded = codec::decode(&encoded);
//! assert_eq!(decoded.plaintext, "RQPp");
//! assert_eq!(decoded.key, Some('B'));
//!
//! let mut transcoder = Transcoder::new();
//! assert_eq!(transcoder.decode("XAB"), "XY");
//! assert_eq!(transcoder.offset_char(), 'X');
//! ```

pub mod alphabet;
pub mod codec;
pub mod error;
pub mod key;
pub mod transcoder;

#[cfg(feature = "cli")]
pub mod cli;

pub use codec::Decoded;
pub use error::CipherError;
pub use key::OffsetKey;
pub use transcoder::Transcoder;
