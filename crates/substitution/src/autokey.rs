//! Autokey cipher
//!
//! The running key is the keyword followed by the plaintext itself. Text is
//! whitespace-stripped and uppercased; other non-letters pass through and do
//! not consume key letters.
//!
//! Decryption is inherently sequential: once the keyword is used up, the key
//! for each letter is a letter recovered earlier in the same call.

use tracing::trace;
use zeroize::Zeroizing;

use scytale_algorithms::shift;
use scytale_api::{validate, CipherKind, ClassicalCipher, Result};
use scytale_common::{letter_index, strip_whitespace_upper};

/// Autokey cipher marker
#[derive(Debug, Clone, Copy, Default)]
pub struct Autokey;

/// Keyword letters as alphabet positions
fn primer(key: &str) -> Result<Zeroizing<Vec<u32>>> {
    let primer: Zeroizing<Vec<u32>> = Zeroizing::new(key.chars().filter_map(letter_index).collect());
    validate::key(!primer.is_empty(), "Autokey", "key must contain letters")?;
    Ok(primer)
}

/// Encrypt with the keyword followed by the plaintext as running key
pub fn encrypt(plaintext: &str, key: &str) -> Result<String> {
    let primer = primer(key)?;
    let text = strip_whitespace_upper(plaintext);
    trace!(len = text.len(), primer = primer.len(), "autokey encrypt");

    // The whole keystream is known up front
    let mut keystream = primer
        .iter()
        .copied()
        .chain(text.chars().filter_map(letter_index));

    let out = text
        .chars()
        .map(|c| match letter_index(c) {
            Some(_) => {
                let k = keystream.next().unwrap_or(0);
                shift(c, i64::from(k))
            }
            None => c,
        })
        .collect();
    Ok(out)
}

/// Decrypt strictly left to right, feeding recovered letters back as key
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String> {
    let primer = primer(key)?;
    let text = strip_whitespace_upper(ciphertext);
    trace!(len = text.len(), primer = primer.len(), "autokey decrypt");

    let mut recovered: Zeroizing<Vec<u32>> = Zeroizing::new(Vec::with_capacity(text.len()));
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        if letter_index(c).is_none() {
            out.push(c);
            continue;
        }

        let position = recovered.len();
        let k = if position < primer.len() {
            primer[position]
        } else {
            recovered[position - primer.len()]
        };

        let plain = shift(c, -i64::from(k));
        if let Some(index) = letter_index(plain) {
            recovered.push(index);
        }
        out.push(plain);
    }

    Ok(out)
}

impl ClassicalCipher for Autokey {
    type Key = str;
    const KIND: CipherKind = CipherKind::Autokey;

    fn encrypt(plaintext: &str, key: &str) -> Result<String> {
        encrypt(plaintext, key)
    }

    fn decrypt(ciphertext: &str, key: &str) -> Result<String> {
        decrypt(ciphertext, key)
    }
}
