//! Playfair cipher
//!
//! Letters are substituted two at a time through a keyed 5x5 square with
//! `I` and `J` sharing a cell:
//!
//! - same row: each letter takes its right neighbour (left to decrypt)
//! - same column: each letter takes the one below (above to decrypt)
//! - otherwise (rectangle rule): each letter keeps its row and takes the
//!   other letter's column, which is its own inverse

use tracing::{debug, trace};

use scytale_algorithms::square::fold_playfair;
use scytale_algorithms::{AlphabetSquare, Position};
use scytale_api::{validate, CipherKind, ClassicalCipher, Result};
use scytale_common::{is_letter, letters_upper};
use scytale_params::FILLER;

use crate::error::SubstitutionResultExt;


/// Playfair cipher marker
#[derive(Debug, Clone, Copy, Default)]
pub struct Playfair;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Uppercase, drop non-letters, fold `J` into `I`
fn prepare(text: &str) -> Vec<char> {
    letters_upper(text).chars().map(fold_playfair).collect()
}

/// Split prepared letters into digraphs
///
/// A pair of identical letters is broken by inserting `X` after the first,
/// which is then re-paired with the next letter. An unpaired final letter is
/// completed with `X`.
pub fn digraphs(letters: &[char]) -> Vec<(char, char)> {
    let mut pairs = Vec::with_capacity(letters.len() / 2 + 1);
    let mut i = 0;
    while i < letters.len() {
        let a = letters[i];
        let b = letters.get(i + 1).copied().unwrap_or(FILLER);
        if a == b {
            pairs.push((a, FILLER));
            i += 1;
        } else {
            pairs.push((a, b));
            i += 2;
        }
    }
    pairs
}

fn build_square(key: &str) -> Result<AlphabetSquare> {
    validate::key(key.chars().any(is_letter), "Playfair", "key must contain letters")?;
    let square = AlphabetSquare::playfair(key);
    debug!("Playfair square built");
    Ok(square)
}

fn substitute(square: &AlphabetSquare, a: char, b: char, direction: Direction) -> Result<[char; 2]> {
    let pa = square.position(a).map_primitive_err("Playfair")?;
    let pb = square.position(b).map_primitive_err("Playfair")?;

    // Moving back one step is moving forward side - 1 steps
    let step = match direction {
        Direction::Forward => 1,
        Direction::Backward => square.side() - 1,
    };

    let (na, nb) = if pa.row == pb.row {
        (
            Position { row: pa.row, col: pa.col + step },
            Position { row: pb.row, col: pb.col + step },
        )
    } else if pa.col == pb.col {
        (
            Position { row: pa.row + step, col: pa.col },
            Position { row: pb.row + step, col: pb.col },
        )
    } else {
        (
            Position { row: pa.row, col: pb.col },
            Position { row: pb.row, col: pa.col },
        )
    };

    Ok([square.symbol(na), square.symbol(nb)])
}

/// Encrypt with a keyword square
pub fn encrypt(plaintext: &str, key: &str) -> Result<String> {
    let square = build_square(key)?;
    let letters = prepare(plaintext);
    trace!(len = letters.len(), "playfair encrypt");

    let mut out = String::with_capacity(letters.len() + 2);
    for (a, b) in digraphs(&letters) {
        out.extend(substitute(&square, a, b, Direction::Forward)?);
    }
    Ok(out)
}

/// Decrypt with a keyword square
///
/// Filler letters inserted during encryption are left in place.
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String> {
    let square = build_square(key)?;
    let letters = prepare(ciphertext);
    trace!(len = letters.len(), "playfair decrypt");

    let mut out = String::with_capacity(letters.len() + 1);
    for pair in letters.chunks(2) {
        let b = pair.get(1).copied().unwrap_or(FILLER);
        out.extend(substitute(&square, pair[0], b, Direction::Backward)?);
    }
    Ok(out)
}

impl ClassicalCipher for Playfair {
    type Key = str;
    const KIND: CipherKind = CipherKind::Playfair;

    fn encrypt(plaintext: &str, key: &str) -> Result<String> {
        encrypt(plaintext, key)
    }

    fn decrypt(ciphertext: &str, key: &str) -> Result<String> {
        decrypt(ciphertext, key)
    }
}
