//! Cipher traits for the scytale API

pub mod classical;

pub use classical::ClassicalCipher;
