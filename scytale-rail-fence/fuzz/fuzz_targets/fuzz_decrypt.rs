//! Fuzz target for Rail Fence decryption of arbitrary input.
//!
//! This fuzzer tests that Decrypt:
//! 1. Either succeeds or reports incorrect padding, never panics
//! 2. Preserves the character count on success
//! 3. Inverts encryption on whatever it accepts

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use scytale_rail_fence::{Cipher, Error, RailFence, RailFenceKey};

#[derive(Debug, Arbitrary)]
struct DecryptInput {
    rails: String,
    ciphertext: String,
}

fuzz_target!(|input: DecryptInput| {
    let Ok(key) = input.rails.parse::<RailFenceKey>() else {
        return;
    };
    // Closed padding always fills every rail.
    if key.rails().get() > 64 {
        return;
    }

    match RailFence::decrypt(&key, &input.ciphertext) {
        Ok(plaintext) => {
            assert_eq!(
                plaintext.chars().count(),
                input.ciphertext.chars().count()
            );
            assert_eq!(RailFence::encrypt(&key, &plaintext).unwrap(), input.ciphertext);
        }
        Err(Error::IncorrectPadding { actual, .. }) => {
            assert_eq!(actual, input.ciphertext.chars().count());
        }
        Err(e) => panic!("unexpected error: {e}"),
    }
});
