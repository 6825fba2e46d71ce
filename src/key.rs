// Validated offset key.

use std::fmt;
use std::str::FromStr;

use crate::alphabet;
use crate::error::CipherError;

/// Offset character used when nothing else has been configured.
pub const DEFAULT_OFFSET_CHAR: char = 'B';

/// An offset character that is guaranteed to belong to the reference
/// alphabet.
///
/// The key's alphabet index is the substitution shift, and the key symbol
/// itself is written as the first character of every non-empty ciphertext.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetKey {
    symbol: char,
    index: u8,
}

impl OffsetKey {
    /// Validate `symbol` as an offset key.
    pub fn new(symbol: char) -> Result<Self, CipherError> {
        match alphabet::index_of(symbol) {
            Some(index) => Ok(Self {
                symbol,
                index: index as u8,
            }),
            None => Err(CipherError::InvalidOffsetCharacter(symbol)),
        }
    }

    /// The key symbol.
    pub fn symbol(self) -> char {
        self.symbol
    }

    /// Canonical alphabet index of the key symbol.
    pub fn index(self) -> usize {
        self.index as usize
    }

    /// Every valid key, in alphabet order.
    pub fn all() -> impl Iterator<Item = OffsetKey> {
        (0..alphabet::ALPHABET_LEN).map(|index| Self {
            symbol: alphabet::symbol_at(index),
            index: index as u8,
        })
    }
}

impl Default for OffsetKey {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_OFFSET_CHAR,
            index: 1,
        }
    }
}

impl TryFrom<char> for OffsetKey {
    type Error = CipherError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::new(symbol)
    }
}

impl FromStr for OffsetKey {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::new(symbol),
            _ => Err(CipherError::KeyLength(s.chars().count())),
        }
    }
}

impl fmt::Display for OffsetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
