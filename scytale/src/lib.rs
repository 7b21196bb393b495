//! # Scytale
//!
//! Classical cipher library.
//!
//! ## Features
//!
//! - `std` (default): Enable standard library support
//! - `hill` (default): Enable the Hill cipher
//! - `rail-fence` (default): Enable the Rail Fence cipher
//!
//! ## Supported Ciphers
//!
//! - **Hill**: 3x3 key matrix over Z/26, lowercase letters only
//! - **Rail Fence**: zig-zag transposition over any text
//!
//! ## Example
//!
//! ```
//! use scytale::hill::{Hill, HillKey};
//! use scytale::rail_fence::{RailFence, RailFenceKey};
//! use scytale::Cipher;
//!
//! let key = HillKey::new("gyb").unwrap();
//! assert_eq!(Hill::encrypt(&key, "act").unwrap(), "poz");
//!
//! let key: RailFenceKey = "2".parse().unwrap();
//! assert_eq!(RailFence::encrypt(&key, "abcdef").unwrap(), "acebdf");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub use scytale_core::{alphabet, Cipher, Error, Result};

/// Core traits for cipher primitives.
pub mod traits {
    pub use scytale_core::Cipher;
}

/// Hill cipher over a 3x3 key matrix.
#[cfg(feature = "hill")]
pub mod hill {
    pub use scytale_hill::*;
}

/// Rail Fence zig-zag transposition cipher.
#[cfg(feature = "rail-fence")]
pub mod rail_fence {
    pub use scytale_rail_fence::*;
}
