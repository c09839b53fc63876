//! Common implementations and shared functionality for the scytale library
//!
//! This crate provides the modular arithmetic and text normalisation helpers
//! used across multiple scytale components.

#![forbid(unsafe_code)]

pub mod math_common;
pub mod text;

pub use math_common::{mod_inv, reduce};
pub use text::{
    is_letter, letter_from_index, letter_index, letters_upper, strip_whitespace_upper,
};
