//! Constant values for scytale cipher operations
//!
//! This crate provides the alphabets, square dimensions and filler symbols
//! shared across the scytale workspace.

#![forbid(unsafe_code)]

pub mod square;
pub mod substitution;
pub mod transposition;

/// Number of letters in the Latin alphabet every cipher operates over
pub const ALPHABET_LEN: usize = 26;

/// Filler letter used for Playfair digraph splitting and Hill padding
pub const FILLER: char = 'X';
