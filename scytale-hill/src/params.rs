//! Hill cipher parameters.

/// Side length of the key matrix; also the block size in letters.
pub const MATRIX_SIZE: usize = 3;

/// Number of letters in a full key.
pub const KEY_LENGTH: usize = MATRIX_SIZE * MATRIX_SIZE;

/// Letter appended to fill the final block.
pub const PAD: char = 'x';

/// Ring index of [`PAD`].
pub(crate) const PAD_INDEX: u8 = PAD as u8 - b'a';
