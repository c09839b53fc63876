//! Error reporting through the facade

use scytale::prelude::*;
use scytale::substitution::{hill, playfair, vigenere};

#[test]
fn test_messages_are_displayable() {
    let err = hill::encrypt("HELLO", "ABC").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid key: Hill: key must be 4 letters (2x2 matrix)"
    );

    let err = hill::encrypt("HELLO", "AAAA").unwrap_err();
    assert!(err.to_string().contains("not invertible modulo 26"), "{err}");

    let err = "enigma".parse::<CipherKind>().unwrap_err();
    assert_eq!(err.to_string(), "Unknown cipher: enigma");
}

#[test]
fn test_missing_keys_are_rejected() {
    for kind in [CipherKind::Vigenere, CipherKind::Playfair, CipherKind::Autokey] {
        for mode in [Mode::Encrypt, Mode::Decrypt] {
            assert!(
                matches!(dispatch(kind, mode, "", "HELLO"), Err(Error::InvalidKey { .. })),
                "{kind} {mode}"
            );
        }
    }
    assert!(vigenere::decrypt("HELLO", "123").is_err());
    assert!(playfair::decrypt("HELLO", " ").is_err());
}

#[test]
fn test_no_partial_output_on_failure() {
    // A bad symbol late in the stream fails the whole call
    let result = dispatch(CipherKind::Adfgvx, Mode::Decrypt, "K", "AAAAAAAAAB");
    assert_eq!(
        result,
        Err(Error::InvalidCharacter {
            context: "ADFGVX",
            character: 'B'
        })
    );

    let result = dispatch(CipherKind::Hill, Mode::Decrypt, "HILL", "ABC");
    assert!(matches!(result, Err(Error::InvalidLength { .. })));
}

#[test]
fn test_generic_over_cipher() {
    fn round_trip<C: ClassicalCipher>(text: &str, key: &C::Key) -> String {
        let cipher = C::encrypt(text, key).unwrap();
        C::decrypt(&cipher, key).unwrap()
    }

    assert_eq!(round_trip::<Caesar>("Zebra", &-3), "Zebra");
    assert_eq!(round_trip::<Vigenere>("Zebra", "key"), "Zebra");
    assert_eq!(round_trip::<Columnar>("zebra", "key"), "ZEBRA");
    assert_eq!(round_trip::<Adfgvx>("zebra 7", &AdfgvxKey::new("key", "word")), "ZEBRA7");
}
