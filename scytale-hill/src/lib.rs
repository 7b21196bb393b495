//! # Hill cipher
//!
//! Polygraphic substitution over the ring Z/26. A key string fills a 3x3
//! matrix; each 3-letter block of the message is multiplied by that matrix
//! to encrypt, and by its modular inverse to decrypt.
//!
//! ## Key layout
//!
//! | Key      | Matrix                  |
//! |----------|-------------------------|
//! | `gyb`    | `g y b / a b c / d e f` |
//! | `""`     | `a b c / d e f / g h i` |
//!
//! Keys shorter than nine letters are completed with `a`, `b`, `c`, ...
//! A key only decrypts when its determinant is a unit mod 26.
//!
//! ## Example
//!
//! ```
//! use scytale_hill::{Cipher, Hill, HillKey};
//!
//! let key = HillKey::new("gyb").unwrap();
//! let ciphertext = Hill::encrypt(&key, "act").unwrap();
//! assert_eq!(ciphertext, "poz");
//! assert_eq!(Hill::decrypt(&key, &ciphertext).unwrap(), "act");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

extern crate alloc;

mod hill;
mod key;
pub mod matrix;
pub mod params;

pub use hill::{padded_length, Hill};
pub use key::HillKey;
pub use matrix::KeyMatrix;
pub use scytale_core::{Cipher, Error, Result};
