//! Branchless per-lane selection.

use crate::lanes::LOW_BITS;

/// Per lane: the byte from `a` where the flag lane's low bit is 1, else `b`.
///
/// Only bit 0 of each flag lane is read.
#[inline]
pub const fn select_by_flag(a: u64, b: u64, flags: u64) -> u64 {
    let mask = (flags & LOW_BITS) * 0xFF;
    (a & mask) | (b & !mask)
}

/// Like [`select_by_flag`] but driven by comparator output (`0x80` lanes).
#[inline]
pub const fn select_by_high_bit(a: u64, b: u64, flags: u64) -> u64 {
    select_by_flag(a, b, flags >> 7)
}
