//! # Rail Fence cipher
//!
//! Zig-zag transposition. The message is written diagonally down and up
//! across a number of rails, then read off rail by rail.
//!
//! ```text
//! W . . . E . . . C . . . R . . . L . . . T . . . E
//! . E . R . D . S . O . E . E . F . E . A . O . C .
//! . . A . . . I . . . V . . . D . . . E . . . N . .
//! ```
//!
//! By default messages are padded with `X` so the path ends on the bottom
//! rail, and decryption insists on that closed length. [`Padding::Unpadded`]
//! gives the classic cipher with no padding.
//!
//! ## Example
//!
//! ```
//! use scytale_rail_fence::{Cipher, RailFence, RailFenceKey};
//!
//! let key: RailFenceKey = "3".parse().unwrap();
//! let ciphertext = RailFence::encrypt(&key, "WEAREDISCOVEREDFLEEATONCE").unwrap();
//! assert_eq!(ciphertext, "WECRLTEERDSOEEFEAOCXAIVDENX");
//! assert_eq!(
//!     RailFence::decrypt(&key, &ciphertext).unwrap(),
//!     "WEAREDISCOVEREDFLEEATONCEXX"
//! );
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

extern crate alloc;

mod fence;
mod grid;
pub mod path;
mod rails;

pub use fence::RailFence;
pub use path::{padded_length, ZigZag};
pub use rails::{is_valid_key, Padding, RailCount, RailFenceKey};
pub use scytale_core::{Cipher, Error, Result};

/// Character appended to close the zig-zag path.
pub const PAD: char = 'X';
