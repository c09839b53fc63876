//! Constants for keyed alphabet squares (Playfair and ADFGVX)

/// Side length of the Playfair square
pub const PLAYFAIR_SIDE: usize = 5;

/// Letter folded into its neighbour so that 26 letters fit a 5x5 square
pub const PLAYFAIR_MERGED: char = 'J';

/// Letter that absorbs [`PLAYFAIR_MERGED`]
pub const PLAYFAIR_MERGED_INTO: char = 'I';

/// Side length of the ADFGVX Polybius square
pub const ADFGVX_SIDE: usize = 6;

/// Symbol set covered by the ADFGVX square, in natural fill order
pub const ADFGVX_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Coordinate symbols naming the rows and columns of the ADFGVX square
pub const ADFGVX_SYMBOLS: [char; ADFGVX_SIDE] = ['A', 'D', 'F', 'G', 'V', 'X'];

/// Separates the Polybius key from the columnar key in a compound ADFGVX key
pub const KEY_SEPARATOR: char = ',';
