//! Error handling for cipher primitives

use scytale_api::Error as CoreError;


/// The error type for cipher primitives
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Symbol missing from a square or coordinate alphabet
    #[error("Symbol {symbol:?} not found in {context}")]
    Symbol {
        /// Structure that was searched
        context: &'static str,
        /// The unresolved symbol
        symbol: char,
    },

    /// Matrix has no inverse modulo the given modulus
    #[error("Matrix with determinant {determinant} is not invertible modulo {modulus}")]
    NotInvertible {
        /// Determinant reduced modulo `modulus`
        determinant: u32,
        /// Working modulus
        modulus: u32,
    },
}

/// Result type for primitive operations
pub type Result<T> = core::result::Result<T, Error>;

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Symbol { context, symbol } => CoreError::InvalidCharacter {
                context,
                character: symbol,
            },
            Error::NotInvertible {
                determinant,
                modulus,
            } => CoreError::NonInvertibleKey {
                context: "key matrix",
                determinant,
                modulus,
            },
        }
    }
}
