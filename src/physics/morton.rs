//! Morton (Z-order) keys for 2D points
//!
//! A particle's position is scaled by a fixed precision, converted to a
//! pair of order-preserving 32-bit words, and bit-interleaved into a
//! 64-bit key. Sorting particles by key places spatial neighbors next to
//! each other, which is what lets the tree builder group particles by key
//! prefix in a single linear scan instead of subdividing geometry.

use crate::physics::math::{Scalar, Vector};

/// Fixed grid resolution: world units are scaled by this factor before
/// quantization, so one grid cell is 1/512 of a unit across.
pub const PRECISION: Scalar = 512.0;

/// Bit-spread helper masks ("Interleave by Binary Magic Numbers"), applied
/// widest first so each 32-bit word ends up occupying alternate bits.
const SPREAD: [(u64, u32); 5] = [
    (0x0000_ffff_0000_ffff, 16),
    (0x00ff_00ff_00ff_00ff, 8),
    (0x0f0f_0f0f_0f0f_0f0f, 4),
    (0x3333_3333_3333_3333, 2),
    (0x5555_5555_5555_5555, 1),
];

/// Map a two's-complement word to an unsigned word with the same order.
/// Flipping the sign bit moves negative values below positive ones.
#[inline]
const fn order(x: i32) -> u32 {
    (x as u32) ^ 0x8000_0000
}

#[inline]
const fn unorder(x: u32) -> i32 {
    (x ^ 0x8000_0000) as i32
}

#[inline]
fn spread(word: u32) -> u64 {
    let mut w = word as u64;
    for (mask, shift) in SPREAD {
        w = (w | (w << shift)) & mask;
    }
    w
}

#[inline]
fn compress(word: u64) -> u32 {
    let mut w = word & 0x5555_5555_5555_5555;
    w = (w | (w >> 1)) & 0x3333_3333_3333_3333;
    w = (w | (w >> 2)) & 0x0f0f_0f0f_0f0f_0f0f;
    w = (w | (w >> 4)) & 0x00ff_00ff_00ff_00ff;
    w = (w | (w >> 8)) & 0x0000_ffff_0000_ffff;
    (w | (w >> 16)) as u32
}

/// Interleave two 32-bit words so `re` occupies the even-numbered bit
/// positions (LSB included) and `im` the odd-numbered ones.
pub fn interleave(re: u32, im: u32) -> u64 {
    spread(re) | (spread(im) << 1)
}

/// Split an interleaved key back into its even-bit and odd-bit words.
pub fn deinterleave(key: u64) -> (u32, u32) {
    (compress(key), compress(key >> 1))
}

/// The Morton key of a point at the fixed [`PRECISION`], or `None` when a
/// scaled component falls outside the 32-bit range (the "no key"
/// sentinel). Non-finite components also land here: NaN and infinity fail
/// the strict range comparison.
///
/// Guarantee: if `a` precedes `b` in Z-order at this precision then
/// `key(a) <= key(b)`.
pub fn key(p: Vector) -> Option<u64> {
    let x = p.x * PRECISION;
    let y = p.y * PRECISION;
    // Strict comparison: i32::MAX rounds *up* when converted to f32, so
    // equality already means out of range.
    if x.abs() < i32::MAX as Scalar && y.abs() < i32::MAX as Scalar {
        Some(interleave(order(x as i32), order(y as i32)))
    } else {
        None
    }
}

/// The key with `mask` applied, preserving the sentinel.
pub fn masked_key(p: Vector, mask: u64) -> Option<u64> {
    key(p).map(|z| z & mask)
}

/// Invert [`key`]: recover the scaled integer grid coordinates.
pub fn decode(key: u64) -> (i32, i32) {
    let (re, im) = deinterleave(key);
    (unorder(re), unorder(im))
}
