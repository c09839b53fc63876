//! # scytale
//!
//! Classical pen-and-paper ciphers as pure, deterministic text transformations.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! scytale = "0.3"
//! ```
//!
//! ```
//! use scytale::substitution::caesar;
//!
//! assert_eq!(caesar::encrypt("Hello, World!", 3), "Khoor, Zruog!");
//! ```
//!
//! ## Features
//!
//! - `substitution` (default): Caesar, Vigenere, Atbash, Autokey, Hill, Playfair
//! - `transposition` (default): Rail Fence, Columnar
//! - `hybrid` (default): ADFGVX, implies `transposition`
//! - `serde`: `Serialize`/`Deserialize` for [`CipherKind`] and [`Mode`]
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - `scytale-api`: Error type, cipher trait, cipher and mode selectors
//! - `scytale-algorithms`: Shift, matrix, grid, square and zigzag primitives
//! - `scytale-substitution`: Letter substitution ciphers
//! - `scytale-transposition`: Transposition ciphers
//! - `scytale-hybrid`: Substitution followed by transposition
//!
//! The [`mod@dispatch`] module is the entry point for front ends that pick a
//! cipher and mode at runtime.

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use scytale_algorithms as algorithms;
pub use scytale_api as api;
pub use scytale_common as common;
pub use scytale_params as params;

// Feature-gated re-exports
#[cfg(feature = "substitution")]
pub use scytale_substitution as substitution;

#[cfg(feature = "transposition")]
pub use scytale_transposition as transposition;

#[cfg(feature = "hybrid")]
pub use scytale_hybrid as hybrid;

pub mod dispatch;

pub use api::{CipherKind, Error, Mode, Result};
pub use dispatch::dispatch;

/// Common imports for scytale users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core trait and selectors
    pub use crate::api::{CipherKind, ClassicalCipher, Mode};

    pub use crate::dispatch::dispatch;

    // Cipher markers based on features
    #[cfg(feature = "substitution")]
    pub use crate::substitution::{Atbash, Autokey, Caesar, Hill, Playfair, Vigenere};

    #[cfg(feature = "transposition")]
    pub use crate::transposition::{Columnar, RailFence};

    #[cfg(feature = "hybrid")]
    pub use crate::hybrid::{Adfgvx, AdfgvxKey};
}
