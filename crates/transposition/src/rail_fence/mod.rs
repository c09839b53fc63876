//! Rail Fence cipher
//!
//! Text is written diagonally across a number of rails in a zigzag and read
//! off one rail at a time. Fewer than two rails leaves the text unchanged.

use tracing::trace;

use scytale_algorithms::ZigZag;
use scytale_api::{CipherKind, ClassicalCipher, Result};
use scytale_common::strip_whitespace_upper;
use scytale_params::transposition::MIN_RAILS;


/// Rail Fence cipher marker
#[derive(Debug, Clone, Copy, Default)]
pub struct RailFence;

/// Rail count capped at the text length
///
/// Rails beyond the text length stay empty, so huge counts are clamped
/// before anything is allocated. Callers have already handled
/// `rails < MIN_RAILS`.
fn capped_rails(rails: i64, len: usize) -> usize {
    let cap = len.max(MIN_RAILS as usize);
    usize::try_from(rails).map_or(cap, |r| r.min(cap))
}

/// Write along the zigzag, read rail by rail
///
/// Whitespace is removed and letters uppercased before the text is laid out.
pub fn encrypt(plaintext: &str, rails: i64) -> String {
    if rails < MIN_RAILS {
        return plaintext.to_string();
    }

    let text: Vec<char> = strip_whitespace_upper(plaintext).chars().collect();
    let rails = capped_rails(rails, text.len());
    trace!(len = text.len(), rails, "rail fence encrypt");

    let mut buckets: Vec<String> = ZigZag::rail_counts(rails, text.len())
        .into_iter()
        .map(String::with_capacity)
        .collect();
    for (&c, (rail, _)) in text.iter().zip(ZigZag::new(rails, text.len())) {
        buckets[rail].push(c);
    }
    buckets.concat()
}

/// Cut the ciphertext into rails, then read back along the zigzag
pub fn decrypt(ciphertext: &str, rails: i64) -> String {
    if rails < MIN_RAILS {
        return ciphertext.to_string();
    }

    let text: Vec<char> = ciphertext.chars().collect();
    let rails = capped_rails(rails, text.len());
    trace!(len = text.len(), rails, "rail fence decrypt");

    let mut rest = text.as_slice();
    let mut cursors: Vec<core::slice::Iter<'_, char>> = ZigZag::rail_counts(rails, text.len())
        .into_iter()
        .map(|count| {
            let (rail, tail) = rest.split_at(count);
            rest = tail;
            rail.iter()
        })
        .collect();

    ZigZag::new(rails, text.len())
        .filter_map(|(rail, _)| cursors[rail].next())
        .collect()
}

impl ClassicalCipher for RailFence {
    type Key = i64;
    const KIND: CipherKind = CipherKind::RailFence;

    fn encrypt(plaintext: &str, rails: &i64) -> Result<String> {
        Ok(encrypt(plaintext, *rails))
    }

    fn decrypt(ciphertext: &str, rails: &i64) -> Result<String> {
        Ok(decrypt(ciphertext, *rails))
    }
}
