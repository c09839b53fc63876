//! Atbash cipher
//!
//! Mirrors the alphabet (A<->Z, B<->Y, ...), per case. Takes no key and is
//! its own inverse.

use tracing::trace;

use scytale_algorithms::mirror;
use scytale_api::{CipherKind, ClassicalCipher, Result};

/// Atbash cipher marker
#[derive(Debug, Clone, Copy, Default)]
pub struct Atbash;

/// Mirror every letter
pub fn encrypt(plaintext: &str) -> String {
    trace!(len = plaintext.len(), "atbash");
    plaintext.chars().map(mirror).collect()
}

/// Identical to [`encrypt`]
pub fn decrypt(ciphertext: &str) -> String {
    encrypt(ciphertext)
}

impl ClassicalCipher for Atbash {
    type Key = ();
    const KIND: CipherKind = CipherKind::Atbash;

    fn encrypt(plaintext: &str, _key: &()) -> Result<String> {
        Ok(encrypt(plaintext))
    }

    fn decrypt(ciphertext: &str, _key: &()) -> Result<String> {
        Ok(decrypt(ciphertext))
    }
}
