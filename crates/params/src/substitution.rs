//! Constants for substitution ciphers

/// Number of letters in a Hill key (one per entry of the 2x2 matrix)
pub const HILL_KEY_LEN: usize = 4;

/// Dimension of the Hill key matrix
pub const HILL_BLOCK: usize = 2;

/// Modulus for all letter arithmetic
pub const LETTER_MODULUS: u32 = 26;
