//! Shared primitives for classical ciphers
//!
//! Every cipher in scytale is composed from a handful of building blocks:
//!
//! - [`shift`]: modular shift and mirror of a single letter
//! - [`matrix`]: 2x2 matrix arithmetic modulo 26
//! - [`grid`]: keyed columnar transposition with irregular column lengths
//! - [`square`]: keyed alphabet squares (Playfair 5x5, ADFGVX 6x6)
//! - [`zigzag`]: the rail fence coordinate sequence
//!
//! All primitives are pure functions or immutable values; nothing here holds
//! state across calls.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{Error, Result};

pub mod grid;
pub mod matrix;
pub mod shift;
pub mod square;
pub mod zigzag;

pub use grid::{column_lengths, column_order, KeyedColumns};
pub use matrix::Matrix2;
pub use shift::{mirror, shift};
pub use square::{AlphabetSquare, Position};
pub use zigzag::ZigZag;
