//! Rail grid holding only the cells the zig-zag path visits.
//!
//! Row `r` keeps the characters on rail `r`, left to right. Rails the path
//! never reaches get no row, so memory follows the message length whatever
//! the rail count.

use crate::path::ZigZag;
use crate::rails::RailCount;
use alloc::collections::TryReserveError;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// Characters of each reached rail, plus the number of path cells per rail.
pub(crate) struct Grid {
    rows: Vec<Vec<char>>,
    lengths: Vec<usize>,
}

impl Grid {
    /// Empty rows shaped for a path of `len` cells.
    ///
    /// Walks the path once to count the cells on every rail, then reserves
    /// each row up front.
    pub(crate) fn new(rails: RailCount, len: usize) -> Result<Self, TryReserveError> {
        let reached = rails.get().min(len);

        let mut lengths = Vec::new();
        lengths.try_reserve_exact(reached)?;
        lengths.resize(reached, 0);
        for (row, _) in ZigZag::new(rails, len) {
            lengths[row] += 1;
        }

        let mut rows = Vec::new();
        rows.try_reserve_exact(reached)?;
        for &n in &lengths {
            let mut row = Vec::new();
            row.try_reserve_exact(n)?;
            rows.push(row);
        }

        Ok(Self { rows, lengths })
    }

    /// Write `source` along `path`, one character per cell.
    pub(crate) fn place(&mut self, path: ZigZag, source: impl Iterator<Item = char>) {
        for ((row, _), c) in path.zip(source) {
            self.rows[row].push(c);
        }
    }

    /// Fill the rails in order from `source`, each with as many characters
    /// as the path visits on it.
    ///
    /// Stops early if `source` runs out.
    pub(crate) fn fill_rows(&mut self, mut source: impl Iterator<Item = char>) {
        for (row, &n) in self.rows.iter_mut().zip(&self.lengths) {
            row.extend(source.by_ref().take(n - row.len()));
        }
    }

    /// Characters rail by rail, left to right.
    pub(crate) fn read_rows(&self) -> impl Iterator<Item = char> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Characters in the order `path` visits them.
    pub(crate) fn read_path(&self, path: ZigZag) -> impl Iterator<Item = char> + '_ {
        let mut cursors = vec![0usize; self.rows.len()];
        path.filter_map(move |(row, _)| {
            let c = self.rows[row].get(cursors[row]).copied();
            cursors[row] += 1;
            c
        })
    }
}

impl fmt::Display for Grid {
    /// One rail per line, characters separated by spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            for (j, c) in row.iter().enumerate() {
                if j != 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};

    fn rails(n: usize) -> RailCount {
        RailCount::new(n).unwrap()
    }

    #[test]
    fn test_row_lengths_follow_path() {
        let grid = Grid::new(rails(3), 9).unwrap();
        assert_eq!(grid.lengths, [3, 4, 2]);
        assert!(grid.rows.iter().all(Vec::is_empty));
        assert_eq!(grid.read_rows().count(), 0);
    }

    #[test]
    fn test_unreached_rails_have_no_row() {
        let grid = Grid::new(rails(100_000), 2).unwrap();
        assert_eq!(grid.lengths, [1, 1]);

        let grid = Grid::new(rails(usize::MAX), 3).unwrap();
        assert_eq!(grid.lengths, [1, 1, 1]);

        let grid = Grid::new(rails(5), 0).unwrap();
        assert!(grid.rows.is_empty());
    }

    #[test]
    fn test_unrepresentable_shape_is_an_error() {
        assert!(Grid::new(rails(usize::MAX), usize::MAX).is_err());
    }

    #[test]
    fn test_place_then_read_rows() {
        let mut grid = Grid::new(rails(2), 6).unwrap();
        grid.place(ZigZag::new(rails(2), 6), "abcdef".chars());
        assert_eq!(grid.read_rows().collect::<String>(), "acebdf");
    }

    #[test]
    fn test_fill_rows_then_read_path() {
        let mut grid = Grid::new(rails(2), 6).unwrap();
        grid.fill_rows("acebdf".chars());
        assert_eq!(
            grid.read_path(ZigZag::new(rails(2), 6)).collect::<String>(),
            "abcdef"
        );
    }

    #[test]
    fn test_fill_rows_short_source() {
        let mut grid = Grid::new(rails(2), 4).unwrap();
        grid.fill_rows("abc".chars());
        assert_eq!(grid.rows[0], ['a', 'b']);
        assert_eq!(grid.rows[1], ['c']);
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(rails(3), 5).unwrap();
        grid.place(ZigZag::new(rails(3), 5), "WEARE".chars());
        assert_eq!(grid.to_string(), "W E\nE R\nA");
    }
}
