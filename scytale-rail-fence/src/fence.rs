//! Rail Fence encryption and decryption.

use crate::grid::Grid;
use crate::path::{padded_length, ZigZag};
use crate::rails::{Padding, RailCount, RailFenceKey};
use crate::PAD;
use alloc::collections::TryReserveError;
use alloc::string::String;
use core::iter;
use scytale_core::{Cipher, Error, Result};
use tracing::{debug, trace};

/// The Rail Fence transposition cipher.
pub struct RailFence;

impl Padding {
    /// Length a message of `len` characters has after padding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooLarge`] if the closed length overflows `usize`.
    pub fn length_for(self, len: usize, rails: RailCount) -> Result<usize> {
        match self {
            Padding::Closed => padded_length(len, rails),
            Padding::Unpadded => Ok(len),
        }
    }
}

fn too_large(rails: RailCount, length: usize) -> impl Fn(TryReserveError) -> Error {
    move |_| Error::TooLarge {
        rails: rails.get(),
        length,
    }
}

impl Cipher for RailFence {
    type Key = RailFenceKey;

    const NAME: &'static str = "Rail Fence";

    fn encrypt(key: &RailFenceKey, plaintext: &str) -> Result<String> {
        let rails = key.rails();
        let len = plaintext.chars().count();
        let total = key.padding().length_for(len, rails)?;

        debug!(
            rails = rails.get(),
            length = len,
            padding = total - len,
            "rail fence padded message"
        );

        let mut grid = Grid::new(rails, total).map_err(too_large(rails, len))?;
        let padded = plaintext.chars().chain(iter::repeat(PAD)).take(total);
        grid.place(ZigZag::new(rails, total), padded);

        trace!(grid = %grid, "rail fence grid");

        let mut ciphertext = String::new();
        ciphertext
            .try_reserve(total)
            .map_err(too_large(rails, len))?;
        ciphertext.extend(grid.read_rows());
        Ok(ciphertext)
    }

    fn decrypt(key: &RailFenceKey, ciphertext: &str) -> Result<String> {
        let rails = key.rails();

        let total = ciphertext.chars().count();
        let expected = key.padding().length_for(total, rails)?;
        if expected != total {
            return Err(Error::IncorrectPadding {
                expected,
                actual: total,
            });
        }

        debug!(rails = rails.get(), input = ciphertext, "rail fence ciphertext");

        // The row lengths give the shape of the path; pour the ciphertext
        // into it rail by rail.
        let mut grid = Grid::new(rails, total).map_err(too_large(rails, total))?;
        grid.fill_rows(ciphertext.chars());

        trace!(grid = %grid, "rail fence grid");

        // A fresh walk reads the characters back in path order.
        Ok(grid.read_path(ZigZag::new(rails, total)).collect())
    }
}
