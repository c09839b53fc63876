//! Cipher and mode selectors
//!
//! These are the values a front end collects from the user before calling into
//! a cipher: which cipher to run and in which direction.

use core::fmt;
use core::str::FromStr;

use crate::{Error, Result};

/// The classical ciphers provided by scytale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CipherKind {
    /// Fixed shift substitution
    Caesar,
    /// Repeating-key polyalphabetic substitution
    Vigenere,
    /// 2x2 matrix substitution over Z/26
    Hill,
    /// 5x5 square digraph substitution
    Playfair,
    /// Mirrored alphabet substitution
    Atbash,
    /// Zigzag transposition
    RailFence,
    /// Polybius fractionation followed by columnar transposition
    Adfgvx,
    /// Keyed columnar transposition
    Columnar,
    /// Plaintext-extended running key substitution
    Autokey,
}

impl CipherKind {
    /// Every supported cipher, in display order
    pub const ALL: [CipherKind; 9] = [
        CipherKind::Caesar,
        CipherKind::Vigenere,
        CipherKind::Hill,
        CipherKind::Playfair,
        CipherKind::Atbash,
        CipherKind::RailFence,
        CipherKind::Adfgvx,
        CipherKind::Columnar,
        CipherKind::Autokey,
    ];

    /// Canonical lowercase name, accepted back by [`FromStr`]
    pub const fn name(self) -> &'static str {
        match self {
            CipherKind::Caesar => "caesar",
            CipherKind::Vigenere => "vigenere",
            CipherKind::Hill => "hill",
            CipherKind::Playfair => "playfair",
            CipherKind::Atbash => "atbash",
            CipherKind::RailFence => "rail-fence",
            CipherKind::Adfgvx => "adfgvx",
            CipherKind::Columnar => "columnar",
            CipherKind::Autokey => "autokey",
        }
    }

    /// Short description of the key the cipher expects
    pub const fn key_hint(self) -> &'static str {
        match self {
            CipherKind::Caesar => "integer shift",
            CipherKind::Vigenere => "keyword (letters)",
            CipherKind::Hill => "4 letters forming an invertible 2x2 matrix",
            CipherKind::Playfair => "keyword (letters)",
            CipherKind::Atbash => "none",
            CipherKind::RailFence => "integer rail count",
            CipherKind::Adfgvx => "polybius key,columnar key",
            CipherKind::Columnar => "keyword",
            CipherKind::Autokey => "keyword (letters)",
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        let kind = match normalized.as_str() {
            "caesar" => CipherKind::Caesar,
            "vigenere" | "vigenère" => CipherKind::Vigenere,
            "hill" => CipherKind::Hill,
            "playfair" => CipherKind::Playfair,
            "atbash" => CipherKind::Atbash,
            "railfence" | "rail" => CipherKind::RailFence,
            "adfgvx" => CipherKind::Adfgvx,
            "columnar" => CipherKind::Columnar,
            "autokey" => CipherKind::Autokey,
            _ => {
                return Err(Error::UnknownCipher {
                    name: s.to_string(),
                })
            }
        };
        Ok(kind)
    }
}

/// Direction of a cipher operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Plaintext to ciphertext
    Encrypt,
    /// Ciphertext to plaintext
    Decrypt,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Encrypt => f.write_str("encrypt"),
            Mode::Decrypt => f.write_str("decrypt"),
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "encrypt" | "enc" | "e" => Ok(Mode::Encrypt),
            "decrypt" | "dec" | "d" => Ok(Mode::Decrypt),
            _ => Err(Error::UnknownMode {
                name: s.to_string(),
            }),
        }
    }
}
