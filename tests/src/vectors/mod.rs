//! Known-answer vectors
//!
//! Vectors live in `known_answers.json` next to this file and are parsed once
//! on first use.

use once_cell::sync::Lazy;
use serde::Deserialize;

use scytale::CipherKind;

/// One known-answer case
#[derive(Debug, Clone, Deserialize)]
pub struct KnownAnswer {
    /// Cipher under test
    pub cipher: CipherKind,
    /// Key in the dispatcher's single-string form
    pub key: String,
    /// Input to encrypt
    pub plaintext: String,
    /// Expected encryption output
    pub ciphertext: String,
    /// Expected decryption of `ciphertext`
    pub recovered: String,
    /// Where the vector comes from
    #[serde(default)]
    pub source: Option<String>,
}

const KNOWN_ANSWERS_JSON: &str = include_str!("known_answers.json");

/// Every known-answer vector
pub static KNOWN_ANSWERS: Lazy<Vec<KnownAnswer>> = Lazy::new(|| {
    serde_json::from_str(KNOWN_ANSWERS_JSON).unwrap_or_else(|err| {
        panic!("known_answers.json is malformed: {err}");
    })
});

/// Vectors for a single cipher
pub fn for_cipher(kind: CipherKind) -> impl Iterator<Item = &'static KnownAnswer> {
    KNOWN_ANSWERS.iter().filter(move |v| v.cipher == kind)
}
