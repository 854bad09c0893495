//! Set-bit lookup: byte value → ascending positions of its set bits.
//!
//! Turns a gathered flag byte into offsets. The table is built on first use
//! and shared read-only afterwards; [`SetBits`] computes the same sequence
//! on demand with a bit scan.

use crate::lanes::gather_high_bits;
use std::iter::FusedIterator;
use std::sync::OnceLock;

/// Set-bit positions of one byte value.
#[derive(Debug, Clone, Copy, Default)]
struct Positions {
    len: u8,
    bits: [u8; 8],
}

impl Positions {
    fn of(byte: u8) -> Self {
        let mut entry = Positions::default();
        for bit in 0..8u8 {
            if (byte >> bit) & 1 == 1 {
                entry.bits[entry.len as usize] = bit;
                entry.len += 1;
            }
        }
        entry
    }

    fn as_slice(&self) -> &[u8] {
        &self.bits[..self.len as usize]
    }
}

static SET_BIT_TABLE: OnceLock<[Positions; 256]> = OnceLock::new();

fn table() -> &'static [Positions; 256] {
    SET_BIT_TABLE.get_or_init(|| std::array::from_fn(|b| Positions::of(b as u8)))
}

/// Bit indices (0..=7) set in `byte`, ascending.
///
/// ```
/// use swar_lanes::lookup::positions_of_set_bits;
///
/// assert_eq!(positions_of_set_bits(0b1000_0100), &[2, 7]);
/// assert!(positions_of_set_bits(0).is_empty());
/// ```
pub fn positions_of_set_bits(byte: u8) -> &'static [u8] {
    table()[byte as usize].as_slice()
}

/// Iterator over the set bits of a byte, lowest first, computed by bit scan.
#[derive(Debug, Clone)]
pub struct SetBits(u8);

impl SetBits {
    /// Scan the set bits of `byte`.
    pub fn new(byte: u8) -> Self {
        SetBits(byte)
    }
}

impl Iterator for SetBits {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        if self.0 == 0 {
            return None;
        }
        let bit = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SetBits {}

impl FusedIterator for SetBits {}

/// Lane indices whose comparator flag (`0x80`) is set, ascending.
///
/// Gathered lane `i` sits at bit `7 - i`, so the table's ascending bit
/// positions are walked backwards.
pub fn matching_lanes(flags: u64) -> impl DoubleEndedIterator<Item = usize> {
    positions_of_set_bits(gather_high_bits(flags))
        .iter()
        .rev()
        .map(|&bit| 7 - bit as usize)
}
