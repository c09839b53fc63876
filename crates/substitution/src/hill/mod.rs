//! Hill cipher (2x2)
//!
//! A four-letter key is read row-major into a 2x2 matrix over Z/26. Letter
//! pairs are multiplied by that matrix to encrypt and by its modular inverse
//! to decrypt. Keys whose determinant has no inverse modulo 26 are rejected
//! before any text is touched.
//!
//! Only letters take part; anything else in the text is dropped.
//! Odd-length plaintext is padded with `X`. Decryption strips one trailing
//! `X` unconditionally, which also removes a genuine final `X` from the
//! plaintext; this lossy depadding is kept on purpose.

use tracing::{debug, trace, warn};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use scytale_algorithms::Matrix2;
use scytale_api::{validate, CipherKind, ClassicalCipher, Result};
use scytale_common::{letter_from_index, letter_index};
use scytale_params::substitution::{HILL_BLOCK, HILL_KEY_LEN};
use scytale_params::FILLER;

use crate::error::SubstitutionResultExt;


/// Hill cipher marker
#[derive(Debug, Clone, Copy, Default)]
pub struct Hill;

/// A validated Hill key: the key matrix and its inverse modulo 26
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct HillKey {
    matrix: Matrix2,
    inverse: Matrix2,
}

impl HillKey {
    /// Parse a four-letter key (surrounding whitespace ignored, case-insensitive)
    pub fn parse(key: &str) -> Result<Self> {
        let key = key.trim();
        let letters: Zeroizing<Vec<u32>> =
            Zeroizing::new(key.chars().filter_map(letter_index).collect());
        validate::key(
            letters.len() == HILL_KEY_LEN && key.chars().count() == HILL_KEY_LEN,
            "Hill",
            "key must be 4 letters (2x2 matrix)",
        )?;

        let matrix = Matrix2::new(letters[0], letters[1], letters[2], letters[3]);
        let inverse = matrix.inverse().map_primitive_err("Hill")?;
        debug!(determinant = matrix.determinant(), "Hill key accepted");

        Ok(Self { matrix, inverse })
    }

    /// The key matrix
    pub fn matrix(&self) -> &Matrix2 {
        &self.matrix
    }

    /// The inverse key matrix modulo 26
    pub fn inverse(&self) -> &Matrix2 {
        &self.inverse
    }
}

impl core::fmt::Debug for HillKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HillKey").finish_non_exhaustive()
    }
}

/// Letters of `text` as alphabet positions
fn letters(text: &str) -> Vec<u32> {
    text.chars().filter_map(letter_index).collect()
}

fn multiply_pairs(matrix: &Matrix2, letters: &[u32]) -> String {
    letters
        .chunks_exact(HILL_BLOCK)
        .flat_map(|pair| matrix.mul_vector([pair[0], pair[1]]))
        .map(letter_from_index)
        .collect()
}

/// Encrypt letter pairs under a parsed key
pub fn encrypt_with(plaintext: &str, key: &HillKey) -> Result<String> {
    let mut letters = letters(plaintext);
    trace!(len = letters.len(), "hill encrypt");
    if letters.len() % HILL_BLOCK != 0 {
        letters.push(u32::from(FILLER) - u32::from('A'));
    }
    Ok(multiply_pairs(&key.matrix, &letters))
}

/// Decrypt letter pairs under a parsed key, then strip one trailing `X`
pub fn decrypt_with(ciphertext: &str, key: &HillKey) -> Result<String> {
    let letters = letters(ciphertext);
    trace!(len = letters.len(), "hill decrypt");
    validate::multiple_of("Hill ciphertext", letters.len(), HILL_BLOCK)?;

    let mut out = multiply_pairs(&key.inverse, &letters);
    if out.ends_with(FILLER) {
        // Best effort: cannot tell padding from a genuine trailing X
        warn!("stripping trailing padding letter from Hill plaintext");
        out.pop();
    }
    Ok(out)
}

/// Encrypt with a four-letter key
pub fn encrypt(plaintext: &str, key: &str) -> Result<String> {
    encrypt_with(plaintext, &HillKey::parse(key)?)
}

/// Decrypt with a four-letter key
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String> {
    decrypt_with(ciphertext, &HillKey::parse(key)?)
}

impl ClassicalCipher for Hill {
    type Key = str;
    const KIND: CipherKind = CipherKind::Hill;

    fn encrypt(plaintext: &str, key: &str) -> Result<String> {
        encrypt(plaintext, key)
    }

    fn decrypt(ciphertext: &str, key: &str) -> Result<String> {
        decrypt(ciphertext, key)
    }
}
