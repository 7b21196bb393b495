//! Modular arithmetic over the ring Z/26.
//!
//! Intermediate products in the matrix code are carried as `i64` and may be
//! negative (cofactors, determinants), so every reduction here is Euclidean:
//! results always land in `[0, 26)`.

use crate::alphabet::MODULUS;

/// Reduce a signed value into `[0, 26)`.
#[inline]
pub const fn reduce(a: i64) -> u8 {
    a.rem_euclid(MODULUS as i64) as u8
}

/// Greatest common divisor.
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Multiplicative inverse modulo 26.
///
/// Searches `0..26` for the smallest `b` with `a * b ≡ 1 (mod 26)`.
/// Returns `None` when `a` shares a factor with 26, in which case no such
/// `b` exists.
pub fn inverse(a: u8) -> Option<u8> {
    let a = a % MODULUS;
    if gcd(u64::from(a), u64::from(MODULUS)) != 1 {
        return None;
    }
    (0..MODULUS).find(|&b| (u16::from(a) * u16::from(b)) % u16::from(MODULUS) == 1)
}
