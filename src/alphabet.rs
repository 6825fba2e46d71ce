// Reference alphabet: the fixed, ordered symbol table of the transcoder.
//
// Every symbol in the table has a canonical index (its position). Symbols
// outside the table are "pass-through" symbols and are never substituted.

/// The reference alphabet, in canonical order.
pub const REFERENCE_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789()*+-./";

/// Number of symbols in the reference alphabet. All shift arithmetic is
/// performed modulo this value.
pub const ALPHABET_LEN: usize = SYMBOLS.len();

/// Index returned by [`shift_of`] for a symbol outside the alphabet.
pub const NOT_FOUND: i32 = -1;

const SYMBOLS: [u8; 43] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789()*+-./";

const UNMAPPED: u8 = u8::MAX;

/// ASCII -> canonical index lookup. `UNMAPPED` for pass-through bytes.
static INDEX: [u8; 128] = build_index();

const fn build_index() -> [u8; 128] {
    let mut table = [UNMAPPED; 128];
    let mut i = 0;
    while i < SYMBOLS.len() {
        table[SYMBOLS[i] as usize] = i as u8;
        i += 1;
    }
    table
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// Canonical index of `symbol`, or `None` for a pass-through symbol.
#[inline]
pub fn index_of(symbol: char) -> Option<usize> {
    if !symbol.is_ascii() {
        return None;
    }
    match INDEX[symbol as usize] {
        UNMAPPED => None,
        idx => Some(idx as usize),
    }
}

/// Whether `symbol` belongs to the reference alphabet.
#[inline]
pub fn contains(symbol: char) -> bool {
    index_of(symbol).is_some()
}

/// Symbol at canonical index `index`.
///
/// # Panics
///
/// Panics if `index >= ALPHABET_LEN`.
#[inline]
pub fn symbol_at(index: usize) -> char {
    SYMBOLS[index] as char
}

/// Signed shift amount carried by an offset symbol.
///
/// This is the symbol's index, or [`NOT_FOUND`] when the symbol is not in
/// the alphabet. The sentinel is used as-is in the shift arithmetic.
#[inline]
pub fn shift_of(symbol: char) -> i32 {
    index_of(symbol).map_or(NOT_FOUND, |idx| idx as i32)
}

/// Substitute `symbol` by moving it `delta` places along the alphabet,
/// wrapping around at both ends. Pass-through symbols are returned
/// unchanged.
#[inline]
pub fn rotate(symbol: char, delta: i32) -> char {
    match index_of(symbol) {
        Some(idx) => {
            let moved = (idx as i32 + delta).rem_euclid(ALPHABET_LEN as i32);
            symbol_at(moved as usize)
        }
        None => symbol,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_reference_string() {
        assert_eq!(ALPHABET_LEN, REFERENCE_ALPHABET.chars().count());
        for (idx, c) in REFERENCE_ALPHABET.chars().enumerate() {
            assert_eq!(index_of(c), Some(idx), "symbol {c:?}");
            assert_eq!(symbol_at(idx), c);
        }
    }

    #[test]
    fn symbols_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for c in REFERENCE_ALPHABET.chars() {
            assert!(seen.insert(c), "duplicate symbol {c:?}");
        }
    }

    #[test]
    fn canonical_indices() {
        assert_eq!(index_of('A'), Some(0));
        assert_eq!(index_of('Z'), Some(25));
        assert_eq!(index_of('0'), Some(26));
        assert_eq!(index_of('9'), Some(35));
        assert_eq!(index_of('('), Some(36));
        assert_eq!(index_of(')'), Some(37));
        assert_eq!(index_of('*'), Some(38));
        assert_eq!(index_of('+'), Some(39));
        assert_eq!(index_of('-'), Some(40));
        assert_eq!(index_of('.'), Some(41));
        assert_eq!(index_of('/'), Some(42));
    }

    #[test]
    fn pass_through_symbols_are_not_members() {
        for c in ['a', 'z', ' ', '\n', '!', ',', '_', '\u{7f}', 'é', 'Ω', '日'] {
            assert!(!contains(c), "{c:?} should not be in the alphabet");
            assert_eq!(shift_of(c), NOT_FOUND);
        }
    }

    #[test]
    fn rotate_wraps_both_directions() {
        assert_eq!(rotate('A', -1), '/');
        assert_eq!(rotate('/', 1), 'A');
        assert_eq!(rotate('R', -1), 'Q');
        assert_eq!(rotate('A', ALPHABET_LEN as i32), 'A');
        assert_eq!(rotate('C', -(ALPHABET_LEN as i32) - 2), 'A');
    }

    #[test]
    fn rotate_passes_through_foreign_symbols() {
        assert_eq!(rotate('p', 5), 'p');
        assert_eq!(rotate(' ', -3), ' ');
    }
}
