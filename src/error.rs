// Error types for keyshift.

use thiserror::Error;

/// Errors produced by keyshift.
///
/// Encoding and decoding are total over their input, so the only failure
/// in the core is a caller supplying an offset symbol outside the
/// reference alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// The offset character is not a member of the reference alphabet.
    #[error("offset character {0:?} is not in the reference alphabet")]
    InvalidOffsetCharacter(char),

    /// A textual key did not consist of exactly one symbol.
    #[error("offset key must be exactly one symbol, got {0}")]
    KeyLength(usize),
}
