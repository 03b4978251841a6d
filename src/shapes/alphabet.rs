use bitvec::prelude::*;
use std::fmt;

use crate::io::configuration::{PENTOMINO_COUNT, PENTOMINO_SYMBOLS};

/// Position of a symbol within the pentomino alphabet
pub fn symbol_index(symbol: char) -> Option<usize> {
    PENTOMINO_SYMBOLS.chars().position(|letter| letter == symbol)
}

/// Symbol at a position of the pentomino alphabet
pub fn symbol_at(index: usize) -> Option<char> {
    PENTOMINO_SYMBOLS.chars().nth(index)
}

/// Check whether a character is one of the twelve pentomino letters
pub fn is_symbol(symbol: char) -> bool {
    symbol_index(symbol).is_some()
}

/// Fixed-size bitset over the twelve pentomino symbols
///
/// Used to track which pentominoes already sit on a board. Characters outside
/// the alphabet are ignored on insert and never reported as present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolSet {
    bits: BitVec,
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolSet {
    /// Create a set with no symbols present
    pub fn new() -> Self {
        Self {
            bits: bitvec![0; PENTOMINO_COUNT],
        }
    }

    /// Create a set containing every symbol
    pub fn all() -> Self {
        Self {
            bits: bitvec![1; PENTOMINO_COUNT],
        }
    }

    /// Insert a symbol
    pub fn insert(&mut self, symbol: char) {
        if let Some(index) = symbol_index(symbol) {
            self.bits.set(index, true);
        }
    }

    /// Test symbol membership
    pub fn contains(&self, symbol: char) -> bool {
        symbol_index(symbol).is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Test if no symbols are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Test if all twelve symbols are present
    pub fn is_full(&self) -> bool {
        self.bits.all()
    }

    /// Count symbols in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Present symbols in alphabet order
    pub fn to_vec(&self) -> Vec<char> {
        self.bits.iter_ones().filter_map(symbol_at).collect()
    }
}

impl FromIterator<char> for SymbolSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::new();
        for symbol in iter {
            set.insert(symbol);
        }
        set
    }
}

impl fmt::Display for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: String = self.to_vec().into_iter().collect();
        write!(f, "SymbolSet({} symbols: {letters})", self.count())
    }
}
