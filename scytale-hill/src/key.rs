//! Hill cipher key.

use crate::matrix::KeyMatrix;
use alloc::string::String;
use core::str::FromStr;
use rand_core::CryptoRng;
use scytale_core::{Error, Result};

/// A Hill cipher key: the 3x3 encryption matrix.
///
/// The decryption matrix is derived on demand from this value and never
/// stored, so one key can serve both directions.
#[derive(Clone)]
pub struct HillKey {
    matrix: KeyMatrix,
}

impl HillKey {
    /// Create a key from a key string.
    ///
    /// See [`KeyMatrix::from_key`] for how short and long keys are handled.
    /// Invertibility is not required here; a non-invertible key can still
    /// encrypt but [`HillKey::inverse_matrix`] will fail.
    pub fn new(key: &str) -> Result<Self> {
        Ok(Self {
            matrix: KeyMatrix::from_key(key)?,
        })
    }

    /// Generate a random key that can decrypt.
    pub fn generate(rng: &mut impl CryptoRng) -> Self {
        Self {
            matrix: KeyMatrix::random(rng),
        }
    }

    /// The encryption matrix.
    pub fn matrix(&self) -> &KeyMatrix {
        &self.matrix
    }

    /// Derive the decryption matrix.
    pub fn inverse_matrix(&self) -> Result<KeyMatrix> {
        self.matrix.inverse()
    }

    /// Returns true if this key can decrypt.
    pub fn is_invertible(&self) -> bool {
        self.matrix.is_invertible()
    }

    /// The nine-letter key string that rebuilds this key.
    pub fn to_key_string(&self) -> String {
        self.matrix.to_letters()
    }
}

impl From<KeyMatrix> for HillKey {
    fn from(matrix: KeyMatrix) -> Self {
        Self { matrix }
    }
}

impl FromStr for HillKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
