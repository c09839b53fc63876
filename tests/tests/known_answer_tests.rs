//! Known-answer tests through the runtime dispatcher

use scytale::{dispatch, CipherKind, Mode};
use scytale_tests::vectors::for_cipher;
use scytale_tests::KNOWN_ANSWERS;

#[test]
fn test_every_cipher_has_vectors() {
    for kind in CipherKind::ALL {
        assert!(for_cipher(kind).next().is_some(), "no vectors for {kind}");
    }
}

#[test]
fn test_known_answer_encrypt() {
    for v in KNOWN_ANSWERS.iter() {
        let got = dispatch(v.cipher, Mode::Encrypt, &v.key, &v.plaintext)
            .unwrap_or_else(|err| panic!("{} {:?}: {err}", v.cipher, v.source));
        assert_eq!(got, v.ciphertext, "{} {:?}", v.cipher, v.source);
    }
}

#[test]
fn test_known_answer_decrypt() {
    for v in KNOWN_ANSWERS.iter() {
        let got = dispatch(v.cipher, Mode::Decrypt, &v.key, &v.ciphertext)
            .unwrap_or_else(|err| panic!("{} {:?}: {err}", v.cipher, v.source));
        assert_eq!(got, v.recovered, "{} {:?}", v.cipher, v.source);
    }
}

#[test]
fn test_hill_key_matrix() {
    use scytale::algorithms::Matrix2;

    // HILL -> [[7, 8], [11, 11]], determinant 15, inverse determinant 7
    let matrix = Matrix2::new(7, 8, 11, 11);
    assert_eq!(matrix.determinant(), 15);
    assert_eq!(matrix.determinant_inverse(), Some(7));
}

#[test]
fn test_playfair_monarchy_square() {
    use scytale::algorithms::AlphabetSquare;

    let square = AlphabetSquare::playfair("MONARCHY");
    let rows: Vec<String> = square
        .symbols()
        .chunks(square.side())
        .map(|row| row.iter().collect())
        .collect();
    assert_eq!(rows, ["MONAR", "CHYBD", "EFGIK", "LPQST", "UVWXZ"]);
}
