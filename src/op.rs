//! Named lane operations, for callers that pick a primitive at run time.

use crate::errors::ParseError;
use crate::{bits, cmp, lanes, math, select};
use std::fmt;
use std::str::FromStr;

/// Every lane primitive, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneOp {
    Equal,
    Less,
    Greater,
    AddWrap,
    SubWrap,
    AddSat,
    SubSat,
    AbsDiff,
    Min,
    Max,
    Average,
    SwapNibbles,
    ReverseBits,
    Popcount,
    Select,
    Gather,
}

impl LaneOp {
    /// All operations, in display order.
    pub const ALL: [LaneOp; 16] = [
        LaneOp::Equal,
        LaneOp::Less,
        LaneOp::Greater,
        LaneOp::AddWrap,
        LaneOp::SubWrap,
        LaneOp::AddSat,
        LaneOp::SubSat,
        LaneOp::AbsDiff,
        LaneOp::Min,
        LaneOp::Max,
        LaneOp::Average,
        LaneOp::SwapNibbles,
        LaneOp::ReverseBits,
        LaneOp::Popcount,
        LaneOp::Select,
        LaneOp::Gather,
    ];

    /// Canonical kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            LaneOp::Equal => "equal",
            LaneOp::Less => "less",
            LaneOp::Greater => "greater",
            LaneOp::AddWrap => "add-wrap",
            LaneOp::SubWrap => "sub-wrap",
            LaneOp::AddSat => "add-sat",
            LaneOp::SubSat => "sub-sat",
            LaneOp::AbsDiff => "abs-diff",
            LaneOp::Min => "min",
            LaneOp::Max => "max",
            LaneOp::Average => "average",
            LaneOp::SwapNibbles => "swap-nibbles",
            LaneOp::ReverseBits => "reverse-bits",
            LaneOp::Popcount => "popcount",
            LaneOp::Select => "select",
            LaneOp::Gather => "gather",
        }
    }

    /// Number of lane operands the operation takes.
    pub fn arity(self) -> usize {
        match self {
            LaneOp::SwapNibbles | LaneOp::ReverseBits | LaneOp::Popcount | LaneOp::Gather => 1,
            LaneOp::Select => 3,
            _ => 2,
        }
    }

    /// Apply the operation to `operands`.
    ///
    /// `gather` returns its byte in the low 8 bits of the result.
    pub fn apply(self, operands: &[u64]) -> Result<u64, ParseError> {
        if operands.len() != self.arity() {
            return Err(ParseError::WrongArity {
                op: self.name().to_string(),
                expected: self.arity(),
                actual: operands.len(),
            });
        }

        let a = operands[0];
        let b = operands.get(1).copied().unwrap_or_default();
        let result = match self {
            LaneOp::Equal => cmp::equal(a, b),
            LaneOp::Less => cmp::less(a, b),
            LaneOp::Greater => cmp::greater(a, b),
            LaneOp::AddWrap => math::add_wrap(a, b),
            LaneOp::SubWrap => math::sub_wrap(a, b),
            LaneOp::AddSat => math::add_sat(a, b),
            LaneOp::SubSat => math::sub_sat(a, b),
            LaneOp::AbsDiff => math::abs_diff(a, b),
            LaneOp::Min => math::min(a, b),
            LaneOp::Max => math::max(a, b),
            LaneOp::Average => math::average(a, b),
            LaneOp::SwapNibbles => bits::swap_nibbles(a),
            LaneOp::ReverseBits => bits::reverse_bits_per_byte(a),
            LaneOp::Popcount => bits::popcount_per_byte(a),
            LaneOp::Select => select::select_by_flag(a, b, operands[2]),
            LaneOp::Gather => u64::from(lanes::gather_low_bits(a)),
        };
        Ok(result)
    }

    fn names() -> Vec<&'static str> {
        LaneOp::ALL.iter().map(|op| op.name()).collect()
    }
}

impl FromStr for LaneOp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        let op = match normalized.as_str() {
            "equal" | "eq" => LaneOp::Equal,
            "less" | "lt" => LaneOp::Less,
            "greater" | "gt" => LaneOp::Greater,
            "add-wrap" | "add" => LaneOp::AddWrap,
            "sub-wrap" | "sub" => LaneOp::SubWrap,
            "add-sat" => LaneOp::AddSat,
            "sub-sat" => LaneOp::SubSat,
            "abs-diff" => LaneOp::AbsDiff,
            "min" => LaneOp::Min,
            "max" => LaneOp::Max,
            "average" | "avg" => LaneOp::Average,
            "swap-nibbles" => LaneOp::SwapNibbles,
            "reverse-bits" => LaneOp::ReverseBits,
            "popcount" => LaneOp::Popcount,
            "select" => LaneOp::Select,
            "gather" => LaneOp::Gather,
            _ => return Err(ParseError::unknown_op(s, &LaneOp::names())),
        };
        Ok(op)
    }
}

impl fmt::Display for LaneOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
