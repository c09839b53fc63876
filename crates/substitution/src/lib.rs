//! Substitution ciphers for the scytale library
//!
//! This crate provides the letter-substitution family built on top of the
//! primitives in scytale-algorithms and uses the unified API error system.
//!
//! Each cipher lives in its own module exposing free `encrypt` / `decrypt`
//! functions and a marker type implementing [`ClassicalCipher`].

#![forbid(unsafe_code)]

pub mod atbash;
pub mod autokey;
pub mod caesar;
pub mod cipher;
pub mod error;
pub mod hill;
pub mod playfair;
pub mod vigenere;

// Re-export main types for convenience
pub use atbash::Atbash;
pub use autokey::Autokey;
pub use caesar::Caesar;
pub use cipher::ClassicalCipher;
pub use hill::{Hill, HillKey};
pub use playfair::Playfair;
pub use vigenere::Vigenere;

// Re-export the API error system instead of custom error types
pub use scytale_api::error::{validate, Error, Result};
