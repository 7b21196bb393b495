//! # Scytale Core
//!
//! Core traits and utilities for the Scytale classical cipher library.
//!
//! This crate provides:
//! - Common error types
//! - The [`Cipher`] trait implemented by every cipher crate
//! - The 26-letter alphabet mapping shared by the substitution ciphers
//! - Modular arithmetic over the ring Z/26

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod alphabet;
mod error;
pub mod reduce;
mod traits;

pub use error::{Error, Result};
pub use traits::Cipher;

/// Re-export zeroize for convenience.
pub use zeroize::{Zeroize, ZeroizeOnDrop};
