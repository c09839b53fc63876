//! 2x2 matrix arithmetic over Z/26
//!
//! The Hill cipher multiplies letter pairs by a key matrix. Decryption needs
//! the modular inverse of that matrix, which exists exactly when the
//! determinant is a unit modulo 26.

use zeroize::{Zeroize, ZeroizeOnDrop};

use scytale_common::math_common::{mod_add, mod_mul, mod_sub};
use scytale_common::{mod_inv, reduce};
use scytale_params::substitution::LETTER_MODULUS;

use crate::error::{Error, Result};

/// A 2x2 matrix with entries in `[0, 26)`
///
/// Laid out row-major as `[[a, b], [c, d]]`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Matrix2 {
    entries: [[u32; 2]; 2],
}

impl Matrix2 {
    /// Build a matrix from `[[a, b], [c, d]]`, reducing every entry modulo 26
    pub fn new(a: u32, b: u32, c: u32, d: u32) -> Self {
        let m = LETTER_MODULUS;
        Self {
            entries: [[a % m, b % m], [c % m, d % m]],
        }
    }

    /// Entries in row-major order
    pub fn entries(&self) -> [[u32; 2]; 2] {
        self.entries
    }

    /// Determinant reduced to `[0, 26)`
    pub fn determinant(&self) -> u32 {
        let [[a, b], [c, d]] = self.entries;
        let m = LETTER_MODULUS;
        mod_sub(mod_mul(a, d, m), mod_mul(b, c, m), m)
    }

    /// Multiplicative inverse of the determinant, if any
    pub fn determinant_inverse(&self) -> Option<u32> {
        mod_inv(self.determinant(), LETTER_MODULUS)
    }

    /// Adjugate `[[d, -b], [-c, a]]`, reduced modulo 26
    pub fn adjugate(&self) -> Self {
        let [[a, b], [c, d]] = self.entries;
        let m = LETTER_MODULUS;
        Self {
            entries: [
                [d, reduce(-i64::from(b), m)],
                [reduce(-i64::from(c), m), a],
            ],
        }
    }

    /// Scale every entry by `k` modulo 26
    pub fn scale(&self, k: u32) -> Self {
        let m = LETTER_MODULUS;
        let [[a, b], [c, d]] = self.entries;
        Self::new(mod_mul(a, k, m), mod_mul(b, k, m), mod_mul(c, k, m), mod_mul(d, k, m))
    }

    /// Inverse matrix modulo 26: adjugate scaled by the determinant's inverse
    pub fn inverse(&self) -> Result<Self> {
        let inv = self.determinant_inverse().ok_or(Error::NotInvertible {
            determinant: self.determinant(),
            modulus: LETTER_MODULUS,
        })?;
        Ok(self.adjugate().scale(inv))
    }

    /// Matrix-vector product modulo 26
    pub fn mul_vector(&self, v: [u32; 2]) -> [u32; 2] {
        let m = LETTER_MODULUS;
        let [[a, b], [c, d]] = self.entries;
        [
            mod_add(mod_mul(a, v[0], m), mod_mul(b, v[1], m), m),
            mod_add(mod_mul(c, v[0], m), mod_mul(d, v[1], m), m),
        ]
    }
}

impl core::fmt::Debug for Matrix2 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Key material stays out of logs
        f.debug_struct("Matrix2").finish_non_exhaustive()
    }
}
