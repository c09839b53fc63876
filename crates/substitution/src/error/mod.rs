//! Error handling for substitution ciphers
//!
//! This module uses the API error system and adds conversions for
//! primitive-level error types.

// Re-export the primary API error system
pub use scytale_api::error::{validate, Error, Result};

use scytale_algorithms::Error as PrimitiveError;

/// Convert a PrimitiveError to an API Error attributed to `context`
pub fn from_primitive_error(err: PrimitiveError, context: &'static str) -> Error {
    Error::from(err).with_context(context)
}

/// Extension trait to make conversions more ergonomic
pub trait SubstitutionResultExt<T> {
    /// Convert a Result with PrimitiveError to a Result with API Error
    fn map_primitive_err(self, context: &'static str) -> Result<T>;
}

impl<T> SubstitutionResultExt<T> for core::result::Result<T, PrimitiveError> {
    fn map_primitive_err(self, context: &'static str) -> Result<T> {
        self.map_err(|err| from_primitive_error(err, context))
    }
}
