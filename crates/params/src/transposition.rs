//! Constants for transposition ciphers

/// Smallest rail count that actually transposes; fewer rails is the identity
pub const MIN_RAILS: i64 = 2;
