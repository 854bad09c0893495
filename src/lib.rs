//! # swar-lanes
//!
//! SIMD within a register: pack bytes into `u64` words and work on all
//! eight of them at once with plain integer instructions.
//!
//! Every operation treats the eight bytes of a word as independent lanes.
//! Carries and borrows never cross a lane boundary, and nothing branches on
//! the data.
//!
//! ## Lane order
//!
//! Lane 0 is the most significant byte of the word. Packing `b"ABCDEFGH"`
//! gives `0x4142_4344_4546_4748`, and gathering one bit per lane puts lane 0
//! in bit 7 of the resulting byte.
//!
//! ## Example
//!
//! ```
//! use swar_lanes::{broadcast, equal, gather_high_bits, pack, positions_of_set_bits};
//!
//! let (lanes, consumed) = pack(b"a b c d e");
//! assert_eq!(consumed, 8);
//!
//! let spaces = equal(lanes[0], broadcast(b' '));
//! assert_eq!(spaces.count_ones(), 4);
//!
//! // Lanes 1, 3, 5, 7 hold spaces; lane i is bit 7 - i.
//! assert_eq!(gather_high_bits(spaces), 0b0101_0101);
//! assert_eq!(positions_of_set_bits(0b0101_0101), &[0, 2, 4, 6]);
//! ```

pub mod bits;
pub mod cmp;
pub mod config;
mod errors;
pub mod lanes;
pub mod lookup;
pub mod math;
pub mod op;
pub mod parse;
pub mod scan;
pub mod select;

pub use bits::{popcount_per_byte, reverse_bits_per_byte, swap_nibbles};
pub use cmp::{equal, greater, greater_or_equal, in_range, less, less_or_equal};
pub use config::SwarConfig;
pub use errors::{ParseError, disable_color, find_closest_name};
pub use lanes::{
    GATHER_MULTIPLIER, HIGH_BITS, LANE_BYTES, LOW_BITS, Lanes, broadcast, bytes_to_lane,
    gather_high_bits, gather_low_bits, lane_to_bytes, pack, unpack, unpack_into,
};
pub use lookup::{SetBits, matching_lanes, positions_of_set_bits};
pub use math::{abs_diff, add_sat, add_wrap, average, max, min, sub_sat, sub_wrap};
pub use op::LaneOp;
pub use parse::{ByteRange, format_lane, parse_byte, parse_lane};
pub use scan::{Anomaly, AnomalyDetector, count_byte, positions_in_range, to_ascii_uppercase};
pub use select::{select_by_flag, select_by_high_bit};
