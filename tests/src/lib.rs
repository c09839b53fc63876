//! Testing utilities and known-answer vectors for the scytale library

pub mod normalize;
pub mod vectors;

pub use normalize::normalized;
pub use vectors::{KnownAnswer, KNOWN_ANSWERS};
