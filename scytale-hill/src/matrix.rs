//! Key matrix arithmetic over Z/26.
//!
//! This module builds the 3x3 key matrix from a key string, inverts it with
//! the cofactor/adjugate method, and multiplies it against message blocks.

#![allow(clippy::needless_range_loop)]

use crate::params::{KEY_LENGTH, MATRIX_SIZE as N};
use alloc::string::String;
use core::fmt;
use rand_core::{CryptoRng, RngCore};
use scytale_core::alphabet;
use scytale_core::reduce::{self, reduce};
use scytale_core::{Error, Result};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Largest multiple of 26 that fits in a byte, for unbiased sampling.
const SAMPLE_BOUND: u8 = 234;

/// A 3x3 matrix of ring indices in `[0, 26)`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeyMatrix {
    cells: [[u8; N]; N],
}

impl KeyMatrix {
    /// Build a key matrix from a key string.
    ///
    /// Key letters fill the matrix in row-major order. When the key is shorter
    /// than nine letters the remaining cells take the letters `a`, `b`, `c`, ...
    /// in turn, starting from `a` regardless of how many key letters were used.
    /// Letters past the ninth are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRangeCharacter`] if a key character used for the
    /// matrix is not in `a..=z`.
    pub fn from_key(key: &str) -> Result<Self> {
        let mut cells = [[0u8; N]; N];
        let mut letters = key.chars();
        let mut counter = 0u8;

        for i in 0..KEY_LENGTH {
            cells[i / N][i % N] = match letters.next() {
                Some(c) => alphabet::to_index(c)?,
                None => {
                    let generated = counter;
                    counter += 1;
                    generated
                }
            };
        }

        Ok(Self { cells })
    }

    /// Create a matrix from ring indices, reducing each entry mod 26.
    pub fn from_cells(cells: [[u8; N]; N]) -> Self {
        let mut reduced = [[0u8; N]; N];
        for i in 0..N {
            for j in 0..N {
                reduced[i][j] = cells[i][j] % alphabet::MODULUS;
            }
        }
        Self { cells: reduced }
    }

    /// Sample a uniformly random invertible matrix.
    ///
    /// Entries are drawn by rejection sampling bytes below [`SAMPLE_BOUND`];
    /// whole matrices are redrawn until the determinant is a unit mod 26.
    pub fn random(rng: &mut impl CryptoRng) -> Self {
        loop {
            let mut cells = [[0u8; N]; N];
            for cell in cells.iter_mut().flatten() {
                *cell = sample_index(rng);
            }
            let matrix = Self { cells };
            if matrix.is_invertible() {
                return matrix;
            }
        }
    }

    /// Get the matrix entries as ring indices.
    pub fn cells(&self) -> &[[u8; N]; N] {
        &self.cells
    }

    /// The nine entries as letters, row-major.
    pub fn to_letters(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|&index| (b'a' + index) as char)
            .collect()
    }

    fn widened(&self) -> [[i64; N]; N] {
        let mut m = [[0i64; N]; N];
        for i in 0..N {
            for j in 0..N {
                m[i][j] = i64::from(self.cells[i][j]);
            }
        }
        m
    }

    /// Determinant over the integers, before reduction.
    ///
    /// Expands along the first row using cyclic column indices:
    /// `sum_i M[0][i] * (M[1][i+1] * M[2][i+2] - M[1][i+2] * M[2][i+1])`.
    pub fn determinant(&self) -> i64 {
        let m = self.widened();
        (0..N)
            .map(|i| {
                let a = (i + 1) % N;
                let b = (i + 2) % N;
                m[0][i] * (m[1][a] * m[2][b] - m[1][b] * m[2][a])
            })
            .sum()
    }

    /// Returns true if the determinant is a unit mod 26.
    pub fn is_invertible(&self) -> bool {
        reduce::inverse(reduce(self.determinant())).is_some()
    }

    /// Cofactor matrix over the integers, before reduction.
    ///
    /// Each entry is the determinant of the 2x2 minor left after removing its
    /// row and column, signed by the checkerboard pattern that starts positive
    /// at (0, 0).
    pub fn cofactors(&self) -> [[i64; N]; N] {
        let m = self.widened();
        let mut out = [[0i64; N]; N];
        let mut negative = false;

        for row in 0..N {
            for col in 0..N {
                // Complementary minor in row-major order: [a b; c d].
                let mut minor = [0i64; 4];
                let mut k = 0;
                for i in (0..N).filter(|&i| i != row) {
                    for j in (0..N).filter(|&j| j != col) {
                        minor[k] = m[i][j];
                        k += 1;
                    }
                }

                let det = minor[0] * minor[3] - minor[1] * minor[2];
                out[row][col] = if negative { -det } else { det };
                negative = !negative;
            }
        }

        out
    }

    /// Adjugate: the transposed cofactor matrix, reduced mod 26.
    pub fn adjugate(&self) -> Self {
        let cofactors = self.cofactors();
        let mut cells = [[0u8; N]; N];
        for i in 0..N {
            for j in 0..N {
                cells[i][j] = reduce(cofactors[j][i]);
            }
        }
        Self { cells }
    }

    /// Inverse matrix mod 26.
    ///
    /// Computed as `adj(M) * det(M)^-1`, every entry reduced mod 26.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonInvertibleKey`] if the determinant shares a factor
    /// with 26.
    pub fn inverse(&self) -> Result<Self> {
        let determinant = reduce(self.determinant());
        let multiplier =
            reduce::inverse(determinant).ok_or(Error::NonInvertibleKey { determinant })?;

        let mut cells = self.adjugate().cells;
        for cell in cells.iter_mut().flatten() {
            *cell = reduce(i64::from(*cell) * i64::from(multiplier));
        }

        Ok(Self { cells })
    }

    /// Multiply this matrix by a block of ring indices: `result = M * block`.
    pub fn transform_block(&self, block: &[u8; N]) -> [u8; N] {
        let mut result = [0u8; N];
        for j in 0..N {
            let sum: u32 = (0..N)
                .map(|k| u32::from(self.cells[j][k]) * u32::from(block[k]))
                .sum();
            result[j] = (sum % u32::from(alphabet::MODULUS)) as u8;
        }
        result
    }

    /// Matrix product `self * other` mod 26.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut cells = [[0u8; N]; N];
        for i in 0..N {
            for j in 0..N {
                let sum: u32 = (0..N)
                    .map(|k| u32::from(self.cells[i][k]) * u32::from(other.cells[k][j]))
                    .sum();
                cells[i][j] = (sum % u32::from(alphabet::MODULUS)) as u8;
            }
        }
        Self { cells }
    }
}

/// Draw one ring index without modulo bias.
fn sample_index(rng: &mut impl RngCore) -> u8 {
    loop {
        let byte = (rng.next_u32() & 0xff) as u8;
        if byte < SAMPLE_BOUND {
            return byte % alphabet::MODULUS;
        }
    }
}

impl fmt::Display for KeyMatrix {
    /// Renders one row of letters per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            for (j, &index) in row.iter().enumerate() {
                let letter = alphabet::to_char(index).map_err(|_| fmt::Error)?;
                if j != 0 {
                    f.write_str("  ")?;
                }
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}
