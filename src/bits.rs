//! Per-byte bit manipulation.

const NIBBLE_LOW: u64 = 0x0F0F_0F0F_0F0F_0F0F;
const NIBBLE_HIGH: u64 = 0xF0F0_F0F0_F0F0_F0F0;
const ALT_BITS: u64 = 0x5555_5555_5555_5555;
const ALT_PAIRS: u64 = 0x3333_3333_3333_3333;

/// Exchange the high and low nibble of every byte.
#[inline]
pub const fn swap_nibbles(v: u64) -> u64 {
    ((v & NIBBLE_LOW) << 4) | ((v & NIBBLE_HIGH) >> 4)
}

/// Reverse the bit order inside every byte. Byte order is unchanged.
#[inline]
pub const fn reverse_bits_per_byte(v: u64) -> u64 {
    // Swap adjacent bits, then adjacent pairs, then nibbles. The masks stop
    // each step at the byte edge.
    let x = ((v >> 1) & ALT_BITS) | ((v & ALT_BITS) << 1);
    let x = ((x >> 2) & ALT_PAIRS) | ((x & ALT_PAIRS) << 2);
    ((x >> 4) & NIBBLE_LOW) | ((x & NIBBLE_LOW) << 4)
}

/// Count the set bits of every byte; each lane holds 0..=8.
#[inline]
pub const fn popcount_per_byte(v: u64) -> u64 {
    // Per 2-bit field: x - (x >> 1) is its popcount, no borrow possible.
    let pairs = v - ((v >> 1) & ALT_BITS);
    let nibbles = (pairs & ALT_PAIRS) + ((pairs >> 2) & ALT_PAIRS);
    (nibbles + (nibbles >> 4)) & NIBBLE_LOW
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lanes::{bytes_to_lane, lane_to_bytes};

    #[test]
    fn test_swap_nibbles() {
        assert_eq!(swap_nibbles(0x1234_5678_9ABC_DEF0), 0x2143_6587_A9CB_ED0F);
        assert_eq!(swap_nibbles(swap_nibbles(0xDEAD_BEEF_0BAD_F00D)), 0xDEAD_BEEF_0BAD_F00D);
    }

    #[test]
    fn test_reverse_bits_per_byte() {
        let v = bytes_to_lane([0x01, 0x80, 0x0F, 0xF0, 0xA5, 0x3C, 0x12, 0xFF]);
        let expected: [u8; 8] = [0x01u8, 0x80, 0x0F, 0xF0, 0xA5, 0x3C, 0x12, 0xFF].map(u8::reverse_bits);
        assert_eq!(lane_to_bytes(reverse_bits_per_byte(v)), expected);
        assert_eq!(lane_to_bytes(reverse_bits_per_byte(v))[0], 0x80);
    }

    #[test]
    fn test_popcount_per_byte() {
        let v = bytes_to_lane([0x00, 0x01, 0x03, 0x07, 0x0F, 0xF0, 0xAA, 0xFF]);
        assert_eq!(lane_to_bytes(popcount_per_byte(v)), [0, 1, 2, 3, 4, 4, 4, 8]);
    }

    #[test]
    fn test_popcount_sweep() {
        let mut n = 0u64;
        while n < 0xFFFF_FFFF_FFFF {
            let expected = lane_to_bytes(n).map(|b| b.count_ones() as u8);
            assert_eq!(lane_to_bytes(popcount_per_byte(n)), expected, "n = {n:#018x}");
            n = (n * 12 + 13) / 11;
        }
    }
}
