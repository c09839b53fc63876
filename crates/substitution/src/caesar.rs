//! Caesar cipher
//!
//! Every letter is shifted by a constant amount; case is preserved and
//! non-letters pass through.

use tracing::trace;

use scytale_algorithms::shift;
use scytale_api::{CipherKind, ClassicalCipher, Result};
use scytale_common::reduce;
use scytale_params::ALPHABET_LEN;

/// Caesar cipher marker
#[derive(Debug, Clone, Copy, Default)]
pub struct Caesar;

/// Shift every letter forward by `key`
pub fn encrypt(plaintext: &str, key: i64) -> String {
    trace!(len = plaintext.len(), "caesar encrypt");
    plaintext.chars().map(|c| shift(c, key)).collect()
}

/// Shift every letter back by `key`
pub fn decrypt(ciphertext: &str, key: i64) -> String {
    trace!(len = ciphertext.len(), "caesar decrypt");
    // Reduce before negating so i64::MIN cannot overflow
    let back = -i64::from(reduce(key, ALPHABET_LEN as u32));
    ciphertext.chars().map(|c| shift(c, back)).collect()
}

impl ClassicalCipher for Caesar {
    type Key = i64;
    const KIND: CipherKind = CipherKind::Caesar;

    fn encrypt(plaintext: &str, key: &i64) -> Result<String> {
        Ok(encrypt(plaintext, *key))
    }

    fn decrypt(ciphertext: &str, key: &i64) -> Result<String> {
        Ok(decrypt(ciphertext, *key))
    }
}
