//! Cipher trait for scytale-transposition

pub use scytale_api::traits::ClassicalCipher;
