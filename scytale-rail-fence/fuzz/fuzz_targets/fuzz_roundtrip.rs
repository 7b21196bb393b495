//! Fuzz target for the Rail Fence roundtrip (encrypt -> decrypt).
//!
//! This fuzzer tests that:
//! 1. Closed padding decrypts to the message followed only by pad characters
//! 2. Unpadded keys decrypt to exactly the message
//! 3. Both directions are deterministic

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use scytale_rail_fence::{Cipher, RailCount, RailFence, RailFenceKey, PAD};

#[derive(Debug, Arbitrary)]
struct RoundtripInput {
    rails: u8,
    message: String,
    unpadded: bool,
}

fuzz_target!(|input: RoundtripInput| {
    let Ok(rails) = RailCount::new(usize::from(input.rails)) else {
        return;
    };
    let key = if input.unpadded {
        RailFenceKey::unpadded(rails)
    } else {
        RailFenceKey::new(rails)
    };

    let ciphertext = RailFence::encrypt(&key, &input.message).unwrap();
    let plaintext = RailFence::decrypt(&key, &ciphertext).unwrap();

    if input.unpadded {
        assert_eq!(plaintext, input.message, "Unpadded roundtrip failed");
    } else {
        let tail = plaintext
            .strip_prefix(input.message.as_str())
            .expect("Padded roundtrip lost the message");
        assert!(tail.chars().all(|c| c == PAD));
    }

    assert_eq!(
        RailFence::encrypt(&key, &input.message).unwrap(),
        ciphertext,
        "Encrypt should be deterministic"
    );
});
