//! Per-lane unsigned arithmetic.
//!
//! All functions are total over `(u64, u64)`. Carries and borrows are kept
//! inside each lane by doing the low seven bits with plain word arithmetic
//! and patching bit 7 back in with XOR, so lane `i` never sees lane `i ± 1`.

use crate::cmp::less;
use crate::lanes::{HIGH_BITS, LOW_SEVEN};

/// Bits 1..7 of every lane; clears bit 0 so the `>> 1` cannot pull a bit across lanes.
const HIGH_SEVEN: u64 = 0xFEFE_FEFE_FEFE_FEFE;

/// Spread each lane's bit 7 across the whole lane (`0x80` → `0xFF`).
#[inline]
const fn widen(flags: u64) -> u64 {
    (flags >> 7) * 0xFF
}

/// `a + b` per lane, modulo 256.
#[inline]
pub const fn add_wrap(a: u64, b: u64) -> u64 {
    // Low seven bits sum to at most 0xFE per lane; the carry into bit 7 stays
    // put. Bit 7 of the result is a7 ^ b7 ^ carry7, hence the XOR.
    let sum = (a & LOW_SEVEN) + (b & LOW_SEVEN);
    sum ^ ((a ^ b) & HIGH_BITS)
}

/// `a - b` per lane, modulo 256.
#[inline]
pub const fn sub_wrap(a: u64, b: u64) -> u64 {
    // Guard bit 1 on `a`, 0 on `b`: the lane borrows from its own bit 7 at
    // most. That bit ends up as !borrow7; XOR with !(a7 ^ b7) restores
    // a7 ^ b7 ^ borrow7.
    (a | HIGH_BITS).wrapping_sub(b & !HIGH_BITS) ^ ((a ^ !b) & HIGH_BITS)
}

/// `a + b` per lane, clamped at 255.
#[inline]
pub const fn add_sat(a: u64, b: u64) -> u64 {
    let sum = add_wrap(a, b);
    // Carry out of bit 7: both inputs set, or either set and the result clear.
    let carry = ((a & b) | ((a | b) & !sum)) & HIGH_BITS;
    sum | widen(carry)
}

/// `a - b` per lane, clamped at 0.
#[inline]
pub const fn sub_sat(a: u64, b: u64) -> u64 {
    let diff = sub_wrap(a, b);
    // Borrow out of bit 7: b set over a clear, or (a clear or b set) with the
    // result set.
    let borrow = ((!a & b) | ((!a | b) & diff)) & HIGH_BITS;
    diff & !widen(borrow)
}

/// `|a - b|` per lane.
#[inline]
pub const fn abs_diff(a: u64, b: u64) -> u64 {
    let mask = widen(less(a, b));
    let hi = (a & !mask) | (b & mask);
    let lo = (a & mask) | (b & !mask);
    sub_wrap(hi, lo)
}

/// Smaller byte per lane.
#[inline]
pub const fn min(a: u64, b: u64) -> u64 {
    let mask = widen(less(a, b));
    (a & mask) | (b & !mask)
}

/// Larger byte per lane.
#[inline]
pub const fn max(a: u64, b: u64) -> u64 {
    let mask = widen(less(a, b));
    (a & !mask) | (b & mask)
}

/// `floor((a + b) / 2)` per lane.
#[inline]
pub const fn average(a: u64, b: u64) -> u64 {
    // a + b = 2(a & b) + (a ^ b). Clearing bit 0 of each lane before the
    // shift keeps bits from sliding into the lane below.
    (a & b) + (((a ^ b) & HIGH_SEVEN) >> 1)
}
