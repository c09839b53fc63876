//! Runtime cipher selection
//!
//! Front ends collect a cipher name, a mode, a single key string and the
//! text. [`dispatch`] turns the key string into the key the cipher expects
//! and runs it:
//!
//! | Cipher | Key string |
//! |---|---|
//! | Caesar, Rail Fence | integer, surrounding whitespace ignored |
//! | Atbash | ignored |
//! | ADFGVX | `polybius,columnar`; without a comma the whole string is the columnar key |
//! | others | used as given |
//!
//! A cipher whose family is disabled at compile time reports
//! `UnknownCipher`.

use tracing::debug;

use crate::api::{CipherKind, ClassicalCipher, Error, Mode, Result};

/// Run `C` in the given direction
pub fn run<C: ClassicalCipher>(mode: Mode, text: &str, key: &C::Key) -> Result<String> {
    match mode {
        Mode::Encrypt => C::encrypt(text, key),
        Mode::Decrypt => C::decrypt(text, key),
    }
}

/// Parse an integer key, reporting failures against `kind`
pub fn integer_key(kind: CipherKind, key: &str) -> Result<i64> {
    key.trim().parse().map_err(|_| {
        Error::invalid_key(kind.name(), format!("key must be an integer, got {:?}", key.trim()))
    })
}

/// Run the cipher named by `kind` with a key given as a single string
pub fn dispatch(kind: CipherKind, mode: Mode, key: &str, text: &str) -> Result<String> {
    debug!(cipher = %kind, %mode, "dispatching");

    match kind {
        #[cfg(feature = "substitution")]
        CipherKind::Caesar => {
            run::<crate::substitution::Caesar>(mode, text, &integer_key(kind, key)?)
        }
        #[cfg(feature = "substitution")]
        CipherKind::Vigenere => run::<crate::substitution::Vigenere>(mode, text, key),
        #[cfg(feature = "substitution")]
        CipherKind::Hill => run::<crate::substitution::Hill>(mode, text, key),
        #[cfg(feature = "substitution")]
        CipherKind::Playfair => run::<crate::substitution::Playfair>(mode, text, key),
        #[cfg(feature = "substitution")]
        CipherKind::Atbash => run::<crate::substitution::Atbash>(mode, text, &()),
        #[cfg(feature = "substitution")]
        CipherKind::Autokey => run::<crate::substitution::Autokey>(mode, text, key),
        #[cfg(feature = "transposition")]
        CipherKind::RailFence => {
            run::<crate::transposition::RailFence>(mode, text, &integer_key(kind, key)?)
        }
        #[cfg(feature = "transposition")]
        CipherKind::Columnar => run::<crate::transposition::Columnar>(mode, text, key),
        #[cfg(feature = "hybrid")]
        CipherKind::Adfgvx => {
            let key = crate::hybrid::AdfgvxKey::parse(key);
            run::<crate::hybrid::Adfgvx>(mode, text, &key)
        }
        #[allow(unreachable_patterns)]
        _ => Err(Error::UnknownCipher {
            name: kind.name().to_string(),
        }),
    }
}

/// Parse the cipher and mode names, then [`dispatch`]
pub fn dispatch_named(cipher: &str, mode: &str, key: &str, text: &str) -> Result<String> {
    dispatch(cipher.parse()?, mode.parse()?, key, text)
}
