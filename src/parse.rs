//! Text forms of lanes, bytes and byte ranges.

use crate::errors::ParseError;
use crate::lanes::{bytes_to_lane, lane_to_bytes};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Parse a lane written as 16 hex digits, lane 0 first.
///
/// Accepts an optional `0x` prefix and `_` separators:
/// `0x4142_4344_4546_4748` is the lane `b"ABCDEFGH"`.
pub fn parse_lane(input: &str) -> Result<u64, ParseError> {
    let trimmed = input.trim();
    let digits: String = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed)
        .chars()
        .filter(|&c| c != '_')
        .collect();

    if digits.len() != 16 {
        return Err(ParseError::invalid_lane(
            input,
            format!("expected 16 hex digits, found {}", digits.len()),
        ));
    }

    let mut bytes = [0u8; 8];
    hex::decode_to_slice(&digits, &mut bytes)
        .map_err(|e| ParseError::invalid_lane(input, e.to_string()))?;
    Ok(bytes_to_lane(bytes))
}

/// Render a lane as `0x` plus 16 lowercase hex digits, lane 0 first.
pub fn format_lane(lane: u64) -> String {
    format!("0x{}", hex::encode(lane_to_bytes(lane)))
}

/// Parse a byte given as one ASCII character, `0xNN`, or decimal `0`-`255`.
///
/// A lone digit is taken as the character, so `7` means `b'7'`.
pub fn parse_byte(input: &str) -> Result<u8, ParseError> {
    let invalid = || ParseError::InvalidByte {
        input: input.to_string(),
    };

    let mut chars = input.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return if c.is_ascii() { Ok(c as u8) } else { Err(invalid()) };
    }

    if let Some(hex_digits) = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        return u8::from_str_radix(hex_digits, 16).map_err(|_| invalid());
    }

    input.parse::<u8>().map_err(|_| invalid())
}

/// Inclusive byte range such as `A-Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ByteRange {
    pub lo: u8,
    pub hi: u8,
}

impl ByteRange {
    /// Create a range; fails when `lo > hi`.
    pub fn new(lo: u8, hi: u8) -> Result<Self, ParseError> {
        if lo > hi {
            return Err(ParseError::invalid_range(
                &format!("{}-{}", lo, hi),
                "lower bound is above upper bound",
            ));
        }
        Ok(ByteRange { lo, hi })
    }

    /// Whether `byte` falls inside the range.
    pub fn contains(&self, byte: u8) -> bool {
        (self.lo..=self.hi).contains(&byte)
    }
}

impl FromStr for ByteRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Split on the first '-' that is not the very first character, so
        // "--/" parses as '-' to '/'.
        let split = s
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '-')
            .map(|(i, _)| i)
            .ok_or_else(|| ParseError::invalid_range(s, "missing '-' between bounds"))?;

        let (lo, hi) = (&s[..split], &s[split + 1..]);
        let lo = parse_byte(lo).map_err(|_| ParseError::invalid_range(s, "bad lower bound"))?;
        let hi = parse_byte(hi).map_err(|_| ParseError::invalid_range(s, "bad upper bound"))?;
        ByteRange::new(lo, hi).map_err(|_| ParseError::invalid_range(s, "lower bound is above upper bound"))
    }
}

impl TryFrom<String> for ByteRange {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ByteRange> for String {
    fn from(range: ByteRange) -> String {
        range.to_string()
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |b: u8| {
            if b.is_ascii_graphic() && b != b'-' {
                (b as char).to_string()
            } else {
                format!("0x{:02x}", b)
            }
        };
        write!(f, "{}-{}", show(self.lo), show(self.hi))
    }
}
