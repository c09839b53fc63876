//! Transposition ciphers for the scytale library
//!
//! Transposition ciphers permute the positions of symbols without changing
//! them. Both ciphers here are built on the zigzag and keyed-grid primitives
//! of scytale-algorithms and report failures through the unified API error
//! system.

#![forbid(unsafe_code)]

pub mod cipher;
pub mod columnar;
pub mod rail_fence;

// Re-export main types for convenience
pub use cipher::ClassicalCipher;
pub use columnar::Columnar;
pub use rail_fence::RailFence;

// Re-export the API error system instead of custom error types
pub use scytale_api::error::{Error, Result};
