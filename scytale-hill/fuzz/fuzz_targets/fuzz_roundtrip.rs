//! Fuzz target for the Hill cipher roundtrip (key -> encrypt -> decrypt).
//!
//! This fuzzer tests that:
//! 1. Arbitrary key strings either build a matrix or fail cleanly
//! 2. Encrypt never panics on arbitrary text
//! 3. Decrypt with an invertible key recovers the padded plaintext

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use scytale_hill::{padded_length, Cipher, Hill, HillKey};

#[derive(Debug, Arbitrary)]
struct RoundtripInput {
    key: String,
    message: String,
}

fuzz_target!(|input: RoundtripInput| {
    let Ok(key) = HillKey::new(&input.key) else {
        return;
    };

    let Ok(ciphertext) = Hill::encrypt(&key, &input.message) else {
        return;
    };
    assert_eq!(ciphertext.len(), padded_length(input.message.len()));

    match Hill::decrypt(&key, &ciphertext) {
        Ok(plaintext) => {
            assert!(key.is_invertible());
            assert!(
                plaintext.starts_with(&input.message),
                "Roundtrip failed for key {:?}",
                key.to_key_string()
            );
        }
        Err(_) => assert!(!key.is_invertible()),
    }
});
