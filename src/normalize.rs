//! Case folding and the indexable alphabet
//!
//! Every component that compares names goes through this module, so the
//! record validator, both indexes and the tests agree on what a
//! "case-folded name" is.

/// Number of distinct characters a folded name may contain: a-z, 0-9 and '.'.
pub const ALPHABET_LEN: usize = 26 + 10 + 1;

/// Whether `c` may appear in a record name (before folding).
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.'
}

/// Fold a name or prefix for comparison.
pub fn fold_name(name: &str) -> String {
    name.to_ascii_lowercase()
}

/// Map a folded byte to its trie slot, or `None` if it is outside the alphabet.
pub fn slot(byte: u8) -> Option<usize> {
    match byte {
        b'a'..=b'z' => Some((byte - b'a') as usize),
        b'0'..=b'9' => Some(26 + (byte - b'0') as usize),
        b'.' => Some(ALPHABET_LEN - 1),
        _ => None,
    }
}
