//! Error types for Scytale cipher operations.

use core::fmt;

/// Result type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during cipher operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Character has no position in the `a..=z` alphabet.
    OutOfRangeCharacter {
        /// The rejected character.
        character: char,
    },

    /// Ring index has no letter in the `a..=z` alphabet.
    OutOfRangeIndex {
        /// The rejected index.
        index: u32,
    },

    /// Rail count is not a positive decimal integer.
    InvalidKeyFormat,

    /// Ciphertext length does not close the zig-zag path.
    IncorrectPadding {
        /// Length the ciphertext must have.
        expected: usize,
        /// Length provided.
        actual: usize,
    },

    /// The padded message cannot be laid out on the rails in memory.
    TooLarge {
        /// Number of rails.
        rails: usize,
        /// Length of the message.
        length: usize,
    },

    /// Key matrix determinant has no inverse modulo 26.
    NonInvertibleKey {
        /// Determinant reduced modulo 26.
        determinant: u8,
    },
}

impl Error {
    /// Returns true if this is one of the alphabet mapping failures.
    pub fn is_mapping(&self) -> bool {
        matches!(
            self,
            Error::OutOfRangeCharacter { .. } | Error::OutOfRangeIndex { .. }
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRangeCharacter { character } => {
                write!(f, "invalid mapping: character {character:?} is not in a..=z")
            }
            Error::OutOfRangeIndex { index } => {
                write!(f, "invalid mapping: index {index} is not in 0..26")
            }
            Error::InvalidKeyFormat => {
                write!(f, "invalid key: rail count must be a positive integer")
            }
            Error::IncorrectPadding { expected, actual } => {
                write!(
                    f,
                    "incorrect padding: expected length {expected}, got {actual}"
                )
            }
            Error::TooLarge { rails, length } => {
                write!(
                    f,
                    "message too large: {length} characters do not fit on {rails} rails"
                )
            }
            Error::NonInvertibleKey { determinant } => {
                write!(
                    f,
                    "key matrix is not invertible: determinant {determinant} shares a factor with 26"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
