//! Keyed alphabet squares
//!
//! A square is the target symbol set arranged row-major: the keyword's
//! symbols first (deduplicated, first occurrence wins), then every remaining
//! symbol in natural order. Each symbol appears exactly once, so lookup by
//! symbol yields a unique position.

use zeroize::{Zeroize, ZeroizeOnDrop};

use scytale_params::square::{
    ADFGVX_ALPHABET, ADFGVX_SIDE, PLAYFAIR_MERGED, PLAYFAIR_MERGED_INTO, PLAYFAIR_SIDE,
};

use crate::error::{Error, Result};


/// Row and column of a symbol inside a square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Zero-based row
    pub row: usize,
    /// Zero-based column
    pub col: usize,
}

/// A keyed `side x side` square of unique symbols
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct AlphabetSquare {
    #[zeroize(skip)]
    side: usize,
    #[zeroize(skip)]
    name: &'static str,
    cells: Vec<char>,
}

impl AlphabetSquare {
    /// The 5x5 Playfair square: letters only, `J` folded into `I`
    pub fn playfair(key: &str) -> Self {
        let alphabet: String = ('A'..='Z').filter(|&c| c != PLAYFAIR_MERGED).collect();
        let keyword = key.chars().map(fold_playfair);
        Self::arrange("Playfair square", keyword, &alphabet, PLAYFAIR_SIDE)
    }

    /// The 6x6 ADFGVX Polybius square over `A-Z0-9`
    ///
    /// An empty key yields the natural ordering.
    pub fn polybius(key: &str) -> Self {
        let keyword = key.chars().map(|c| c.to_ascii_uppercase());
        Self::arrange("Polybius square", keyword, ADFGVX_ALPHABET, ADFGVX_SIDE)
    }

    fn arrange(
        name: &'static str,
        keyword: impl IntoIterator<Item = char>,
        alphabet: &str,
        side: usize,
    ) -> Self {
        let mut cells: Vec<char> = Vec::with_capacity(side * side);
        let from_keyword = keyword.into_iter().filter(|c| alphabet.contains(*c));
        for c in from_keyword.chain(alphabet.chars()) {
            if !cells.contains(&c) {
                cells.push(c);
            }
        }
        Self { side, name, cells }
    }

    /// Side length
    pub fn side(&self) -> usize {
        self.side
    }

    /// Symbols in row-major order
    pub fn symbols(&self) -> &[char] {
        &self.cells
    }

    /// Whether `symbol` is in the square
    pub fn contains(&self, symbol: char) -> bool {
        self.cells.contains(&symbol)
    }

    /// Position of `symbol`, if present
    pub fn locate(&self, symbol: char) -> Option<Position> {
        self.cells.iter().position(|&c| c == symbol).map(|i| Position {
            row: i / self.side,
            col: i % self.side,
        })
    }

    /// Position of `symbol`, or a `Symbol` error naming this square
    pub fn position(&self, symbol: char) -> Result<Position> {
        self.locate(symbol).ok_or(Error::Symbol {
            context: self.name,
            symbol,
        })
    }

    /// Symbol at `(row, col)`; both coordinates wrap around the side length
    pub fn at(&self, row: usize, col: usize) -> char {
        self.cells[(row % self.side) * self.side + col % self.side]
    }

    /// Symbol at a position
    pub fn symbol(&self, pos: Position) -> char {
        self.at(pos.row, pos.col)
    }
}

impl core::fmt::Debug for AlphabetSquare {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AlphabetSquare")
            .field("name", &self.name)
            .field("side", &self.side)
            .finish_non_exhaustive()
    }
}

/// Uppercase a letter and fold `J` into `I`
#[inline]
pub fn fold_playfair(c: char) -> char {
    let c = c.to_ascii_uppercase();
    if c == PLAYFAIR_MERGED {
        PLAYFAIR_MERGED_INTO
    } else {
        c
    }
}
