//! Per-lane comparisons.
//!
//! Every comparator returns a flag word: `0x80` in each lane where the
//! predicate holds, `0x00` elsewhere. Feed the result to
//! [`gather_high_bits`](crate::lanes::gather_high_bits) to get one bit per
//! lane, or to [`popcount`](u64::count_ones) to count matches.

use crate::lanes::{HIGH_BITS, LOW_SEVEN};

/// `0x80` in each lane where `v < c` (unsigned).
#[inline]
pub const fn less(v: u64, c: u64) -> u64 {
    // Guard bit forced to 1 on the minuend and 0 on the subtrahend: each lane
    // computes 0x80 + lo7(v) - lo7(c) >= 1, so no borrow leaves the lane and
    // bit 7 of `d` is lo7(v) >= lo7(c).
    let d = (v | HIGH_BITS).wrapping_sub(c & !HIGH_BITS);
    // Where the operand high bits differ, v >= c iff v has the high bit;
    // where they agree, the low-seven comparison decides.
    let differ = v ^ c;
    let not_less = ((v & differ) | (d & !differ)) & HIGH_BITS;
    not_less ^ HIGH_BITS
}

/// `0x80` in each lane where `v > c` (unsigned).
#[inline]
pub const fn greater(v: u64, c: u64) -> u64 {
    less(c, v)
}

/// `0x80` in each lane where `v == c`.
#[inline]
pub const fn equal(v: u64, c: u64) -> u64 {
    let x = v ^ c;
    // A zero low-seven value plus 0x7F stays below 0x80; anything else
    // carries into bit 7. OR-ing `x` back catches lanes whose bit 7 differs.
    let y = ((x & LOW_SEVEN) + LOW_SEVEN) | x;
    !y & HIGH_BITS
}

/// `0x80` in each lane where `v <= c`.
#[inline]
pub const fn less_or_equal(v: u64, c: u64) -> u64 {
    greater(v, c) ^ HIGH_BITS
}

/// `0x80` in each lane where `v >= c`.
#[inline]
pub const fn greater_or_equal(v: u64, c: u64) -> u64 {
    less(v, c) ^ HIGH_BITS
}

/// `0x80` in each lane where `lo <= v <= hi`.
///
/// Lanes where `lo > hi` never match.
#[inline]
pub const fn in_range(v: u64, lo: u64, hi: u64) -> u64 {
    greater_or_equal(v, lo) & less_or_equal(v, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lanes::{broadcast, bytes_to_lane};

    #[test]
    fn test_all_byte_pairs_broadcast() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                let (va, vb) = (broadcast(a), broadcast(b));
                let expect = |hit: bool| if hit { HIGH_BITS } else { 0 };
                assert_eq!(equal(va, vb), expect(a == b), "equal({a}, {b})");
                assert_eq!(less(va, vb), expect(a < b), "less({a}, {b})");
                assert_eq!(greater(va, vb), expect(a > b), "greater({a}, {b})");
                assert_eq!(less_or_equal(va, vb), expect(a <= b));
                assert_eq!(greater_or_equal(va, vb), expect(a >= b));
            }
        }
    }

    #[test]
    fn test_mixed_lanes() {
        let v = bytes_to_lane([0x00, 0x7F, 0x80, 0xFF, 0x41, 0x5A, 0x61, 0x20]);
        let c = bytes_to_lane([0x00, 0x80, 0x7F, 0xFE, 0x5A, 0x41, 0x61, 0x21]);
        assert_eq!(equal(v, c), bytes_to_lane([0x80, 0, 0, 0, 0, 0, 0x80, 0]));
        assert_eq!(less(v, c), bytes_to_lane([0, 0x80, 0, 0, 0x80, 0, 0, 0x80]));
        assert_eq!(greater(v, c), bytes_to_lane([0, 0, 0x80, 0x80, 0, 0x80, 0, 0]));
    }

    #[test]
    fn test_in_range_uppercase() {
        let text = bytes_to_lane(*b"Allo Zor");
        let caps = in_range(text, broadcast(b'A'), broadcast(b'Z'));
        assert_eq!(caps, bytes_to_lane([0x80, 0, 0, 0, 0, 0x80, 0, 0]));
    }

    #[test]
    fn test_in_range_inverted_bounds_never_match() {
        let v = bytes_to_lane(*b"ABCDEFGH");
        assert_eq!(in_range(v, broadcast(b'Z'), broadcast(b'A')), 0);
    }
}
