//! Known-answer tests for the Hill cipher.
//!
//! Vectors were worked by hand from the cofactor expansion of each key.

use scytale_hill::{Cipher, Hill, HillKey};

struct Vector {
    key: &'static str,
    plaintext: &'static str,
    ciphertext: &'static str,
}

const VECTORS: &[Vector] = &[
    Vector {
        key: "gyb",
        plaintext: "act",
        ciphertext: "poz",
    },
    Vector {
        key: "baaabaaab",
        plaintext: "attackatdawn",
        ciphertext: "attackatdawn",
    },
    // Swaps the first and last letter of each block.
    Vector {
        key: "aabababaa",
        plaintext: "abcxyz",
        ciphertext: "cbazyx",
    },
];

#[test]
fn test_encrypt_vectors() {
    for v in VECTORS {
        let key = HillKey::new(v.key).unwrap();
        assert_eq!(
            Hill::encrypt(&key, v.plaintext).unwrap(),
            v.ciphertext,
            "key {:?}",
            v.key
        );
    }
}

#[test]
fn test_decrypt_vectors() {
    for v in VECTORS {
        let key = HillKey::new(v.key).unwrap();
        assert_eq!(
            Hill::decrypt(&key, v.ciphertext).unwrap(),
            v.plaintext,
            "key {:?}",
            v.key
        );
    }
}

#[test]
fn test_inverse_matrix_letters() {
    let key = HillKey::new("gyb").unwrap();
    assert_eq!(key.inverse_matrix().unwrap().to_letters(), "tyxolytio");
}
