//! Rail Fence key types.

use core::fmt;
use core::num::NonZeroUsize;
use core::str::FromStr;
use scytale_core::{Error, Result};

/// Returns true if `key` is a positive decimal integer with no leading zero.
///
/// This is the `^[1-9][0-9]*$` shape. A key can pass this check and still be
/// rejected by [`RailCount::from_str`] if it overflows `usize`.
pub fn is_valid_key(key: &str) -> bool {
    let mut digits = key.bytes();
    matches!(digits.next(), Some(b'1'..=b'9')) && digits.all(|b| b.is_ascii_digit())
}

/// A validated, non-zero number of rails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RailCount(NonZeroUsize);

impl RailCount {
    /// Create a rail count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKeyFormat`] for zero.
    pub fn new(rails: usize) -> Result<Self> {
        NonZeroUsize::new(rails)
            .map(Self)
            .ok_or(Error::InvalidKeyFormat)
    }

    /// The number of rails.
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Index of the bottom rail.
    pub fn bottom(self) -> usize {
        self.get() - 1
    }
}

impl FromStr for RailCount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if !is_valid_key(s) {
            return Err(Error::InvalidKeyFormat);
        }
        let rails = s.parse::<usize>().map_err(|_| Error::InvalidKeyFormat)?;
        Self::new(rails)
    }
}

impl fmt::Display for RailCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How messages are padded before encryption.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Padding {
    /// Pad with `X` until the zig-zag path ends on the bottom rail.
    #[default]
    Closed,
    /// Classic rail fence: no padding, any length decrypts.
    Unpadded,
}

/// A Rail Fence key: the rail count and the padding policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RailFenceKey {
    rails: RailCount,
    padding: Padding,
}

impl RailFenceKey {
    /// Create a key with closed padding.
    pub fn new(rails: RailCount) -> Self {
        Self {
            rails,
            padding: Padding::Closed,
        }
    }

    /// Create a key for the classic unpadded cipher.
    pub fn unpadded(rails: RailCount) -> Self {
        Self {
            rails,
            padding: Padding::Unpadded,
        }
    }

    /// Replace the padding policy.
    pub fn with_padding(self, padding: Padding) -> Self {
        Self { padding, ..self }
    }

    /// The rail count.
    pub fn rails(&self) -> RailCount {
        self.rails
    }

    /// The padding policy.
    pub fn padding(&self) -> Padding {
        self.padding
    }
}

impl From<RailCount> for RailFenceKey {
    fn from(rails: RailCount) -> Self {
        Self::new(rails)
    }
}

impl FromStr for RailFenceKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.parse().map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_key() {
        for key in ["1", "3", "10", "907", "18446744073709551616"] {
            assert!(is_valid_key(key), "{key:?} should be valid");
        }
        for key in ["", "0", "01", "-3", "+3", "3 ", " 3", "3.0", "three", "٣"] {
            assert!(!is_valid_key(key), "{key:?} should be invalid");
        }
    }

    #[test]
    fn test_parse_rail_count() {
        assert_eq!("3".parse::<RailCount>().unwrap().get(), 3);
        assert_eq!("1".parse::<RailCount>().unwrap().bottom(), 0);
        assert_eq!("0".parse::<RailCount>(), Err(Error::InvalidKeyFormat));
        assert_eq!("07".parse::<RailCount>(), Err(Error::InvalidKeyFormat));
        assert_eq!("x".parse::<RailCount>(), Err(Error::InvalidKeyFormat));
    }

    #[test]
    fn test_parse_overflow() {
        assert_eq!(
            "999999999999999999999999".parse::<RailCount>(),
            Err(Error::InvalidKeyFormat)
        );
    }

    #[test]
    fn test_new_rejects_zero() {
        assert_eq!(RailCount::new(0), Err(Error::InvalidKeyFormat));
        assert_eq!(RailCount::new(4).unwrap().to_string(), "4");
    }

    #[test]
    fn test_key_padding() {
        let rails = RailCount::new(3).unwrap();
        assert_eq!(RailFenceKey::new(rails).padding(), Padding::Closed);
        assert_eq!(RailFenceKey::unpadded(rails).padding(), Padding::Unpadded);
        assert_eq!(
            RailFenceKey::new(rails).with_padding(Padding::Unpadded),
            RailFenceKey::unpadded(rails)
        );

        let key: RailFenceKey = "5".parse().unwrap();
        assert_eq!(key.rails().get(), 5);
        assert_eq!(key.padding(), Padding::default());
    }
}
