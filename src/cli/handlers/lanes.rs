use crate::cli::args::{LanesArgs, OpArgs};
use crate::cli::global::GlobalArgs;
use crate::cli::input::{notice, read_input};
use swar_lanes::{LaneOp, Lanes, format_lane, parse_lane};

/// Print one packed lane per line, then the uncovered tail bytes.
pub fn handle_lanes(args: LanesArgs, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(args.file.as_deref(), global)?;
    let lanes = Lanes::new(&data);
    let consumed = lanes.consumed();
    let tail = lanes.remainder();

    for (idx, lane) in lanes.enumerate() {
        println!("{:>8}  {}", idx * 8, format_lane(lane));
    }
    if !tail.is_empty() {
        println!("{:>8}  tail {}", consumed, hex::encode(tail));
    }

    notice(
        global,
        &format!("{} lanes, {} tail bytes", consumed / 8, tail.len()),
    );
    Ok(())
}

/// Evaluate one named operation and print the result.
pub fn handle_op(args: OpArgs) -> Result<(), Box<dyn std::error::Error>> {
    let op: LaneOp = args.op.parse()?;
    let operands = args
        .lanes
        .iter()
        .map(|s| parse_lane(s))
        .collect::<Result<Vec<u64>, _>>()?;
    let result = op.apply(&operands)?;

    if op == LaneOp::Gather {
        println!("0x{:02x}", result);
    } else {
        println!("{}", format_lane(result));
    }
    Ok(())
}
