//! Cipher primitive trait.

use crate::Result;
use alloc::string::String;

/// Symmetric text cipher trait.
///
/// Both classical ciphers in this library follow the same shape: a parsed,
/// validated key value and a pair of pure text transforms. Keys are parsed
/// once up front, so encryption and decryption never observe a malformed key.
///
/// # Example
///
/// ```ignore
/// use scytale_core::Cipher;
///
/// let key: MyKey = "...".parse()?;
/// let ciphertext = MyCipher::encrypt(&key, "attack")?;
/// let plaintext = MyCipher::decrypt(&key, &ciphertext)?;
/// ```
pub trait Cipher {
    /// Validated key material.
    type Key;

    /// Human readable cipher name.
    const NAME: &'static str;

    /// Encrypt a message.
    ///
    /// # Arguments
    ///
    /// * `key` - The cipher key.
    /// * `plaintext` - The message to encrypt.
    ///
    /// # Returns
    ///
    /// The ciphertext. It may be longer than `plaintext` when the cipher pads
    /// its input.
    fn encrypt(key: &Self::Key, plaintext: &str) -> Result<String>;

    /// Decrypt a message.
    ///
    /// # Arguments
    ///
    /// * `key` - The cipher key used for encryption.
    /// * `ciphertext` - The message to decrypt.
    ///
    /// # Returns
    ///
    /// The plaintext, including any padding added during encryption.
    fn decrypt(key: &Self::Key, ciphertext: &str) -> Result<String>;
}
