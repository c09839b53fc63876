//! Validation utilities shared by every cipher crate

use super::{Error, Result};

/// Validate a key condition
#[inline(always)]
pub fn key(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::invalid_key(context, message));
    }
    Ok(())
}

/// Validate that a length is a multiple of `block`
#[inline(always)]
pub fn multiple_of(context: &'static str, actual: usize, block: usize) -> Result<()> {
    if block != 0 && actual % block != 0 {
        return Err(Error::InvalidLength {
            context,
            expected: actual.div_ceil(block) * block,
            actual,
        });
    }
    Ok(())
}
