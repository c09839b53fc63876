//! Vigenère cipher
//!
//! Each letter of the text consumes the next key letter, cyclically. Only
//! letters advance the key; everything else passes through untouched.

use tracing::trace;
use zeroize::Zeroizing;

use scytale_algorithms::shift;
use scytale_api::{validate, CipherKind, ClassicalCipher, Result};
use scytale_common::{is_letter, letter_index};

/// Vigenère cipher marker
#[derive(Debug, Clone, Copy, Default)]
pub struct Vigenere;

/// Key letters as shift amounts; non-letters in the key are ignored
fn key_shifts(key: &str) -> Result<Zeroizing<Vec<i64>>> {
    let shifts: Zeroizing<Vec<i64>> =
        Zeroizing::new(key.chars().filter_map(letter_index).map(i64::from).collect());
    validate::key(!shifts.is_empty(), "Vigenere", "key must contain letters")?;
    Ok(shifts)
}

fn apply(text: &str, key: &str, sign: i64) -> Result<String> {
    let shifts = key_shifts(key)?;
    let mut cursor = shifts.iter().cycle();

    let out = text
        .chars()
        .map(|c| {
            if is_letter(c) {
                // `shifts` is non-empty, so the cycle never runs dry
                let k = cursor.next().copied().unwrap_or(0);
                shift(c, sign * k)
            } else {
                c
            }
        })
        .collect();
    Ok(out)
}

/// Encrypt with a repeating keyword
pub fn encrypt(plaintext: &str, key: &str) -> Result<String> {
    trace!(len = plaintext.len(), "vigenere encrypt");
    apply(plaintext, key, 1)
}

/// Decrypt with a repeating keyword
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String> {
    trace!(len = ciphertext.len(), "vigenere decrypt");
    apply(ciphertext, key, -1)
}

impl ClassicalCipher for Vigenere {
    type Key = str;
    const KIND: CipherKind = CipherKind::Vigenere;

    fn encrypt(plaintext: &str, key: &str) -> Result<String> {
        encrypt(plaintext, key)
    }

    fn decrypt(ciphertext: &str, key: &str) -> Result<String> {
        decrypt(ciphertext, key)
    }
}
