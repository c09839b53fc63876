//! Cipher trait for scytale-substitution
//!
//! Re-exported from the API crate so downstream code can depend on this
//! crate alone.

pub use scytale_api::traits::ClassicalCipher;
