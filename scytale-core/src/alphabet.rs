//! Mapping between lowercase letters and ring indices.
//!
//! The substitution ciphers work over the ring Z/26, with `a` at index 0 and
//! `z` at index 25. Both directions reject anything outside that range.

use crate::{Error, Result};

/// Number of symbols in the alphabet, and the modulus of the ring.
pub const MODULUS: u8 = 26;

/// First letter of the alphabet.
const BASE: u8 = b'a';

/// Map a letter to its ring index.
///
/// # Errors
///
/// Returns [`Error::OutOfRangeCharacter`] for anything other than `a..=z`.
#[inline]
pub fn to_index(c: char) -> Result<u8> {
    if c.is_ascii_lowercase() {
        Ok(c as u8 - BASE)
    } else {
        Err(Error::OutOfRangeCharacter { character: c })
    }
}

/// Map a ring index back to its letter.
///
/// # Errors
///
/// Returns [`Error::OutOfRangeIndex`] for indices of 26 and above.
#[inline]
pub fn to_char(index: u8) -> Result<char> {
    if index < MODULUS {
        Ok((BASE + index) as char)
    } else {
        Err(Error::OutOfRangeIndex {
            index: u32::from(index),
        })
    }
}
