//! Hybrid cipher schemes
//!
//! This crate provides ciphers that chain a substitution stage into a
//! transposition stage. ADFGVX fractionates every letter or digit into two
//! coordinate symbols through a keyed Polybius square and then scatters
//! those symbols with a keyed columnar transposition.

#![forbid(unsafe_code)]

pub mod adfgvx;

pub use adfgvx::{Adfgvx, AdfgvxKey};

// Re-export the API error system instead of custom error types
pub use scytale_api::error::{Error, Result};
