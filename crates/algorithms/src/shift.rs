//! Single-letter shift and mirror
//!
//! Both operations are total: any character that is not an ASCII letter is
//! returned unchanged, and case is preserved.

use scytale_common::reduce;
use scytale_params::ALPHABET_LEN;

const MODULUS: u32 = ALPHABET_LEN as u32;

/// Base byte of the letter's case, or `None` for non-letters
#[inline]
fn case_base(c: char) -> Option<u8> {
    match c {
        'A'..='Z' => Some(b'A'),
        'a'..='z' => Some(b'a'),
        _ => None,
    }
}

/// Shift a letter by `amount` positions modulo 26
///
/// `amount` may be negative or arbitrarily large; it is reduced to its
/// canonical residue first. Decryption is `shift(c, -amount)`.
pub fn shift(c: char, amount: i64) -> char {
    let Some(base) = case_base(c) else {
        return c;
    };

    let offset = u32::from(c as u8 - base) + reduce(amount, MODULUS);
    char::from(base + (offset % MODULUS) as u8)
}

/// Reflect a letter to its mirror position in the alphabet (A<->Z, b<->y)
pub fn mirror(c: char) -> char {
    let Some(base) = case_base(c) else {
        return c;
    };

    char::from(base + (MODULUS as u8 - 1) - (c as u8 - base))
}
