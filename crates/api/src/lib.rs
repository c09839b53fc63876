//! Public API traits and types for the scytale library
//!
//! This crate provides the public API surface for the scytale ecosystem, including
//! the cipher trait, the shared error type, and the cipher/mode selectors used by
//! front ends.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result};
pub use traits::ClassicalCipher;
pub use types::{CipherKind, Mode};
