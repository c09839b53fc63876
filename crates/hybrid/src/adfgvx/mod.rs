//! ADFGVX cipher
//!
//! Stage one looks every letter and digit up in a keyed 6x6 square and
//! writes its row and column as two symbols from `ADFGVX`. Stage two runs the
//! symbol stream through a columnar transposition.
//!
//! Characters the square cannot hold (punctuation, whitespace, non-ASCII)
//! are dropped during encryption. The loss is logged but is not an error.

use tracing::{debug, trace, warn};
use zeroize::{Zeroize, ZeroizeOnDrop};

use scytale_algorithms::{AlphabetSquare, KeyedColumns, Position};
use scytale_api::{CipherKind, ClassicalCipher, Error, Result};
use scytale_params::square::{ADFGVX_SYMBOLS, KEY_SEPARATOR};
use scytale_transposition::columnar;


/// ADFGVX cipher marker
#[derive(Debug, Clone, Copy, Default)]
pub struct Adfgvx;

/// The pair of keys ADFGVX takes: Polybius square seed and columnar key
///
/// The Polybius key may be empty, which leaves the square in natural
/// `A-Z0-9` order.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct AdfgvxKey {
    polybius: String,
    columnar: String,
}

impl AdfgvxKey {
    /// Pair a Polybius key with a columnar key
    pub fn new(polybius: impl Into<String>, columnar: impl Into<String>) -> Self {
        Self {
            polybius: polybius.into(),
            columnar: columnar.into(),
        }
    }

    /// Split a compound `polybius,columnar` key on its first comma
    ///
    /// Without a comma the whole string is the columnar key and the Polybius
    /// key is empty. Whitespace around either part is trimmed.
    pub fn parse(compound: &str) -> Self {
        match compound.split_once(KEY_SEPARATOR) {
            Some((polybius, columnar)) => Self::new(polybius.trim(), columnar.trim()),
            None => Self::new("", compound.trim()),
        }
    }

    /// Keyword that orders the 6x6 square
    pub fn polybius(&self) -> &str {
        &self.polybius
    }

    /// Keyword for the transposition stage
    pub fn columnar(&self) -> &str {
        &self.columnar
    }
}

impl core::fmt::Debug for AdfgvxKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AdfgvxKey")
            .field("polybius_len", &self.polybius.chars().count())
            .field("columnar_len", &self.columnar.chars().count())
            .finish()
    }
}

fn symbol_index(symbol: char) -> Result<usize> {
    ADFGVX_SYMBOLS
        .iter()
        .position(|&s| s == symbol)
        .ok_or(Error::InvalidCharacter {
            context: "ADFGVX",
            character: symbol,
        })
}

/// Replace every supported character with its two coordinate symbols
fn fractionate(square: &AlphabetSquare, plaintext: &str) -> Vec<char> {
    let mut symbols = Vec::with_capacity(plaintext.len() * 2);
    let mut dropped = 0usize;
    for c in plaintext.chars().map(|c| c.to_ascii_uppercase()) {
        match square.locate(c) {
            Some(Position { row, col }) => {
                symbols.push(ADFGVX_SYMBOLS[row]);
                symbols.push(ADFGVX_SYMBOLS[col]);
            }
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        warn!(dropped, "ADFGVX dropped characters outside A-Z0-9");
    }
    symbols
}

/// Read symbol pairs back through the square
///
/// An unpaired trailing symbol is ignored.
fn defractionate(square: &AlphabetSquare, symbols: &str) -> Result<String> {
    let symbols: Vec<char> = symbols.chars().collect();
    symbols
        .chunks_exact(2)
        .map(|pair| {
            let row = symbol_index(pair[0])?;
            let col = symbol_index(pair[1])?;
            Ok(square.at(row, col))
        })
        .collect()
}

/// Encrypt with a Polybius key and a columnar key
///
/// An empty columnar key returns the plaintext unchanged.
pub fn encrypt(plaintext: &str, polybius_key: &str, columnar_key: &str) -> String {
    if columnar_key.is_empty() {
        return plaintext.to_string();
    }

    let square = AlphabetSquare::polybius(polybius_key);
    debug!("ADFGVX square built");
    let symbols = fractionate(&square, plaintext);
    trace!(len = symbols.len(), "adfgvx encrypt");
    KeyedColumns::new(columnar_key).transpose(&symbols)
}

/// Decrypt with a Polybius key and a columnar key
///
/// An empty columnar key returns the ciphertext unchanged. Every symbol is
/// checked against `A D F G V X` before the transposition is undone, so a
/// stray character is an `InvalidCharacter` error wherever it sits.
pub fn decrypt(ciphertext: &str, polybius_key: &str, columnar_key: &str) -> Result<String> {
    if columnar_key.is_empty() {
        return Ok(ciphertext.to_string());
    }

    trace!(len = ciphertext.chars().count(), "adfgvx decrypt");
    for symbol in ciphertext.chars() {
        symbol_index(symbol)?;
    }
    let symbols = columnar::decrypt(ciphertext, columnar_key);
    let square = AlphabetSquare::polybius(polybius_key);
    debug!("ADFGVX square built");
    defractionate(&square, &symbols)
}

impl ClassicalCipher for Adfgvx {
    type Key = AdfgvxKey;
    const KIND: CipherKind = CipherKind::Adfgvx;

    fn encrypt(plaintext: &str, key: &Self::Key) -> Result<String> {
        Ok(encrypt(plaintext, key.polybius(), key.columnar()))
    }

    fn decrypt(ciphertext: &str, key: &Self::Key) -> Result<String> {
        decrypt(ciphertext, key.polybius(), key.columnar())
    }
}
