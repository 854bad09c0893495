//! Lane codec: packing byte buffers into `u64` lanes and back.
//!
//! A lane word holds eight independent bytes. Byte order is big-endian and
//! fixed for the whole crate: lane 0 occupies bits 56..63 (the most
//! significant byte) and lane 7 occupies bits 0..7. Byte `8 * i + j` of a
//! packed buffer becomes lane `j` of word `i`.
//!
//! ```
//! use swar_lanes::lanes::{pack, unpack};
//!
//! let (words, consumed) = pack(b"Hello, World!");
//! assert_eq!(words.len(), 1);
//! assert_eq!(consumed, 8);
//! assert_eq!(unpack(&words), b"Hello, W");
//! ```

use std::iter::FusedIterator;
use std::slice::ChunksExact;

/// Bit 7 set in every lane.
pub const HIGH_BITS: u64 = 0x8080_8080_8080_8080;

/// Bit 0 set in every lane. Multiplying a byte by this replicates it.
pub const LOW_BITS: u64 = 0x0101_0101_0101_0101;

/// Bits 0..6 set in every lane.
pub(crate) const LOW_SEVEN: u64 = 0x7F7F_7F7F_7F7F_7F7F;

/// Multiplier that collects the low bit of every lane into the top byte.
///
/// Lane bit `8k` meets multiplier bit `7(m + 1)`; all 64 partial products land
/// on distinct bit positions, so nothing carries, and exactly one product per
/// lane reaches the top byte at bit `56 + k`.
pub const GATHER_MULTIPLIER: u64 = 0x0102_0408_1020_4080;

/// Number of bytes in one lane word.
pub const LANE_BYTES: usize = 8;

/// Replicate `byte` into all eight lanes.
#[inline]
pub const fn broadcast(byte: u8) -> u64 {
    byte as u64 * LOW_BITS
}

/// Split a word into its eight lanes, lane 0 first.
#[inline]
pub const fn lane_to_bytes(lane: u64) -> [u8; 8] {
    lane.to_be_bytes()
}

/// Build a word from eight lanes, lane 0 first.
#[inline]
pub const fn bytes_to_lane(bytes: [u8; 8]) -> u64 {
    u64::from_be_bytes(bytes)
}

/// Pack a buffer into whole lanes.
///
/// Returns the lanes and the number of leading bytes they cover. The
/// `bytes.len() - consumed` trailing bytes (0..=7) are left for scalar code.
/// An empty or short buffer yields no lanes and zero consumed.
pub fn pack(bytes: &[u8]) -> (Vec<u64>, usize) {
    let lanes = Lanes::new(bytes);
    let consumed = lanes.consumed();
    (lanes.collect(), consumed)
}

/// Inverse of [`pack`]: lay the lanes back out as bytes.
pub fn unpack(lanes: &[u64]) -> Vec<u8> {
    let mut out = Vec::with_capacity(lanes.len() * LANE_BYTES);
    for &lane in lanes {
        out.extend_from_slice(&lane_to_bytes(lane));
    }
    out
}

/// Write lanes over the front of `out`, stopping at the last lane that fits.
///
/// Returns the number of bytes written (always a multiple of eight).
pub fn unpack_into(lanes: &[u64], out: &mut [u8]) -> usize {
    let mut written = 0;
    for (chunk, &lane) in out.chunks_exact_mut(LANE_BYTES).zip(lanes) {
        chunk.copy_from_slice(&lane_to_bytes(lane));
        written += LANE_BYTES;
    }
    written
}

/// Collect the low bit of every lane into one byte.
///
/// Lane `i` lands in output bit `7 - i`, so lane 0 is the most significant
/// bit. Bits above bit 0 in each lane are ignored.
#[inline]
pub const fn gather_low_bits(lane: u64) -> u8 {
    // Big-endian lane i is little-endian byte 7 - i, which the multiply
    // sends to result bit 56 + (7 - i).
    ((lane & LOW_BITS).wrapping_mul(GATHER_MULTIPLIER) >> 56) as u8
}

/// Collect the guard bit of every lane (comparator output) into one byte.
#[inline]
pub const fn gather_high_bits(flags: u64) -> u8 {
    gather_low_bits(flags >> 7)
}

/// Borrowing lane iterator over a byte slice.
///
/// The zero-allocation form of [`pack`]: yields one word per whole 8-byte
/// chunk and exposes the uncovered tail through [`Lanes::remainder`].
#[derive(Debug, Clone)]
pub struct Lanes<'a> {
    chunks: ChunksExact<'a, u8>,
    consumed: usize,
}

impl<'a> Lanes<'a> {
    /// Start iterating lanes over `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        let consumed = bytes.len() - bytes.len() % LANE_BYTES;
        Lanes {
            chunks: bytes.chunks_exact(LANE_BYTES),
            consumed,
        }
    }

    /// Number of leading bytes covered by whole lanes.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Trailing bytes not covered by any lane (0..=7 of them).
    pub fn remainder(&self) -> &'a [u8] {
        self.chunks.remainder()
    }
}

impl Iterator for Lanes<'_> {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        self.chunks.next().map(|chunk| {
            let mut buf = [0u8; LANE_BYTES];
            buf.copy_from_slice(chunk);
            bytes_to_lane(buf)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Lanes<'_> {}

impl FusedIterator for Lanes<'_> {}
