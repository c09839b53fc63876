//! Error type definitions for cipher operations

use std::string::String;

/// Primary error type for cipher operations
///
/// Every failure is a deterministic input-validation error: callers surface the
/// `Display` text and do not retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Key has the wrong length, type or shape, or is missing entirely
    #[error("Invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Key matrix determinant has no multiplicative inverse
    #[error("Invalid key: {context}: key matrix is not invertible modulo {modulus} (determinant {determinant})")]
    NonInvertibleKey {
        context: &'static str,
        determinant: u32,
        modulus: u32,
    },

    /// Character cannot be located in the cipher's symbol set
    #[error("Invalid character: {context}: {character:?} is not allowed")]
    InvalidCharacter {
        context: &'static str,
        character: char,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Cipher name not recognised by the dispatcher
    #[error("Unknown cipher: {name}")]
    UnknownCipher { name: String },

    /// Mode name not recognised by the dispatcher
    #[error("Unknown mode: {name} (expected encrypt or decrypt)")]
    UnknownMode { name: String },
}

/// Result type for cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidKey` error
    pub fn invalid_key(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidKey {
            context,
            message: message.into(),
        }
    }

    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::NonInvertibleKey {
                determinant,
                modulus,
                ..
            } => Self::NonInvertibleKey {
                context,
                determinant,
                modulus,
            },
            Self::InvalidCharacter { character, .. } => Self::InvalidCharacter { context, character },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            other @ (Self::UnknownCipher { .. } | Self::UnknownMode { .. }) => other,
        }
    }
}
