//! Keyed columnar transposition
//!
//! The plaintext is written row by row under the key and read off column by
//! column in alphabetical order of the key characters. An empty key leaves
//! the text unchanged.

use tracing::trace;

use scytale_algorithms::KeyedColumns;
use scytale_api::{CipherKind, ClassicalCipher, Result};
use scytale_common::strip_whitespace_upper;


/// Columnar transposition marker
#[derive(Debug, Clone, Copy, Default)]
pub struct Columnar;

/// Read the plaintext grid out in key order
///
/// Whitespace is removed and letters uppercased first. Any string works as a
/// key; repeated characters are read left to right.
pub fn encrypt(plaintext: &str, key: &str) -> String {
    if key.is_empty() {
        return plaintext.to_string();
    }

    let text: Vec<char> = strip_whitespace_upper(plaintext).chars().collect();
    trace!(len = text.len(), "columnar encrypt");
    KeyedColumns::new(key).transpose(&text)
}

/// Rebuild the grid from its columns and read it row by row
pub fn decrypt(ciphertext: &str, key: &str) -> String {
    if key.is_empty() {
        return ciphertext.to_string();
    }

    let text: Vec<char> = ciphertext.chars().collect();
    trace!(len = text.len(), "columnar decrypt");
    KeyedColumns::new(key).untranspose(&text)
}

impl ClassicalCipher for Columnar {
    type Key = str;
    const KIND: CipherKind = CipherKind::Columnar;

    fn encrypt(plaintext: &str, key: &str) -> Result<String> {
        Ok(encrypt(plaintext, key))
    }

    fn decrypt(ciphertext: &str, key: &str) -> Result<String> {
        Ok(decrypt(ciphertext, key))
    }
}
