//! Zig-zag path generation.
//!
//! The path visits one cell per column, bouncing between the top and bottom
//! rails. The walk direction flips on entering either boundary rail,
//! including the very first step on rail 0, and then the row moves one step.
//! With a single rail every step is a boundary and the row never moves.

use crate::rails::RailCount;
use scytale_core::{Error, Result};

/// Iterator over the `(row, column)` positions of a zig-zag path.
#[derive(Clone, Debug)]
pub struct ZigZag {
    bottom: usize,
    len: usize,
    column: usize,
    row: usize,
    descending: bool,
}

impl ZigZag {
    /// Path of `len` positions across `rails` rails.
    pub fn new(rails: RailCount, len: usize) -> Self {
        Self {
            bottom: rails.bottom(),
            len,
            column: 0,
            row: 0,
            descending: false,
        }
    }
}

impl Iterator for ZigZag {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.column == self.len {
            return None;
        }

        if self.row == 0 || self.row == self.bottom {
            self.descending = !self.descending;
        }

        let position = (self.row, self.column);
        self.column += 1;

        if self.bottom > 0 {
            if self.descending {
                self.row += 1;
            } else {
                self.row -= 1;
            }
        }

        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.column;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ZigZag {}

/// Smallest length `>= len` whose zig-zag path ends on the bottom rail.
///
/// The bottom rail is visited at positions `bottom, bottom + period, ...`
/// where `period = 2 * bottom`, so the result is one past the first such
/// position at or after the last message character. An empty message needs
/// no path and stays empty.
///
/// # Errors
///
/// Returns [`Error::TooLarge`] if the padded length overflows `usize`.
pub fn padded_length(len: usize, rails: RailCount) -> Result<usize> {
    if len == 0 {
        return Ok(0);
    }

    let bottom = rails.bottom();
    if bottom == 0 {
        return Ok(len);
    }

    let last = len - 1;
    if last <= bottom {
        return Ok(bottom + 1);
    }

    let too_large = Error::TooLarge {
        rails: rails.get(),
        length: len,
    };
    let period = bottom.checked_mul(2).ok_or(too_large)?;
    let cycles = (last - bottom).div_ceil(period);
    cycles
        .checked_mul(period)
        .and_then(|n| n.checked_add(bottom))
        .and_then(|n| n.checked_add(1))
        .ok_or(too_large)
}
