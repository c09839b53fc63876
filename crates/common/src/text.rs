//! Text normalisation shared by the cipher crates
//!
//! Only ASCII letters count as letters. Anything else, non-ASCII letters
//! included, is a non-letter and is either passed through or dropped by the
//! calling cipher.

use scytale_params::ALPHABET_LEN;

/// Returns true for `A-Z` and `a-z`
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Zero-based alphabet position of a letter, ignoring case
#[inline]
pub fn letter_index(c: char) -> Option<u32> {
    if is_letter(c) {
        Some(u32::from(c.to_ascii_uppercase()) - u32::from(b'A'))
    } else {
        None
    }
}

/// Uppercase letter at a zero-based alphabet position (taken modulo 26)
#[inline]
pub fn letter_from_index(index: u32) -> char {
    char::from(b'A' + (index % ALPHABET_LEN as u32) as u8)
}

/// Remove whitespace and uppercase ASCII letters
pub fn strip_whitespace_upper(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Keep only letters, uppercased
pub fn letters_upper(text: &str) -> String {
    text.chars()
        .filter(|&c| is_letter(c))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
