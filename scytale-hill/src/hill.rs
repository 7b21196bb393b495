//! Hill cipher encryption and decryption.

use crate::key::HillKey;
use crate::matrix::KeyMatrix;
use crate::params::{MATRIX_SIZE, PAD_INDEX};
use alloc::string::String;
use alloc::vec::Vec;
use scytale_core::{alphabet, Cipher, Result};
use tracing::{debug, trace};

/// The Hill cipher over 3-letter blocks.
pub struct Hill;

/// Length of a message after padding to whole blocks.
pub const fn padded_length(len: usize) -> usize {
    len.div_ceil(MATRIX_SIZE) * MATRIX_SIZE
}

/// Multiply every block of `message` by `matrix`.
///
/// The final block is filled with `x` when the message length is not a
/// multiple of the block size.
fn transform(matrix: &KeyMatrix, message: &str) -> Result<String> {
    debug!(matrix = %matrix, input = message, "hill key matrix");

    let indices = message
        .chars()
        .map(alphabet::to_index)
        .collect::<Result<Vec<u8>>>()?;

    let mut result = String::with_capacity(padded_length(indices.len()));

    for (iteration, chunk) in indices.chunks(MATRIX_SIZE).enumerate() {
        let mut block = [PAD_INDEX; MATRIX_SIZE];
        block[..chunk.len()].copy_from_slice(chunk);

        let output = matrix.transform_block(&block);
        for index in output {
            result.push(alphabet::to_char(index)?);
        }

        trace!(
            iteration = iteration + 1,
            input = ?block,
            output = ?output,
            result = result.as_str(),
            "hill block"
        );
    }

    Ok(result)
}

impl Cipher for Hill {
    type Key = HillKey;

    const NAME: &'static str = "Hill";

    fn encrypt(key: &HillKey, plaintext: &str) -> Result<String> {
        transform(key.matrix(), plaintext)
    }

    fn decrypt(key: &HillKey, ciphertext: &str) -> Result<String> {
        let inverse = key.inverse_matrix()?;
        transform(&inverse, ciphertext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scytale_core::Error;

    fn key(s: &str) -> HillKey {
        HillKey::new(s).unwrap()
    }

    #[test]
    fn test_padded_length_rounds_up() {
        assert_eq!(padded_length(0), 0);
        assert_eq!(padded_length(1), 3);
        assert_eq!(padded_length(2), 3);
        assert_eq!(padded_length(3), 3);
        assert_eq!(padded_length(4), 6);
        assert_eq!(padded_length(5), 6);
    }

    #[test]
    fn test_known_vector() {
        let k = key("gyb");
        assert_eq!(Hill::encrypt(&k, "act").unwrap(), "poz");
        assert_eq!(Hill::decrypt(&k, "poz").unwrap(), "act");
    }

    #[test]
    fn test_pads_final_block_with_x() {
        let k = key("gyb");
        let ciphertext = Hill::encrypt(&k, "hello").unwrap();
        assert_eq!(ciphertext.len(), 6);
        assert_eq!(Hill::decrypt(&k, &ciphertext).unwrap(), "hellox");

        let ciphertext = Hill::encrypt(&k, "a").unwrap();
        assert_eq!(ciphertext.len(), 3);
        assert_eq!(Hill::decrypt(&k, &ciphertext).unwrap(), "axx");
    }

    #[test]
    fn test_identity_key() {
        let k = key("baaabaaab");
        assert_eq!(Hill::encrypt(&k, "attackatdawn").unwrap(), "attackatdawn");
        assert_eq!(Hill::decrypt(&k, "attackatdawn").unwrap(), "attackatdawn");
    }

    #[test]
    fn test_empty_message() {
        let k = key("gyb");
        assert_eq!(Hill::encrypt(&k, "").unwrap(), "");
        assert_eq!(Hill::decrypt(&k, "").unwrap(), "");
    }

    #[test]
    fn test_rejects_characters_outside_alphabet() {
        let k = key("gyb");
        assert_eq!(
            Hill::encrypt(&k, "attack at dawn"),
            Err(Error::OutOfRangeCharacter { character: ' ' })
        );
        assert_eq!(
            Hill::decrypt(&k, "POZ"),
            Err(Error::OutOfRangeCharacter { character: 'P' })
        );
    }

    #[test]
    fn test_non_invertible_key_encrypts_but_cannot_decrypt() {
        let k = key("caaacaaab");
        assert!(Hill::encrypt(&k, "act").is_ok());
        assert_eq!(
            Hill::decrypt(&k, "act"),
            Err(Error::NonInvertibleKey { determinant: 4 })
        );
    }

    #[test]
    fn test_name() {
        assert_eq!(Hill::NAME, "Hill");
    }
}
