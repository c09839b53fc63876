//! Trait implemented by every classical cipher

use crate::error::Result;
use crate::types::CipherKind;

/// Common trait for all classical ciphers
///
/// Implementors are zero-sized markers; all state lives in the key passed to
/// each call, so every operation is a pure function of its arguments.
pub trait ClassicalCipher {
    /// The key type used by this cipher
    type Key: ?Sized;

    /// Which cipher this is
    const KIND: CipherKind;

    /// Returns the name of this cipher
    fn name() -> &'static str {
        Self::KIND.name()
    }

    /// Transforms plaintext into ciphertext
    fn encrypt(plaintext: &str, key: &Self::Key) -> Result<String>;

    /// Transforms ciphertext back into (normalised) plaintext
    fn decrypt(ciphertext: &str, key: &Self::Key) -> Result<String>;
}
