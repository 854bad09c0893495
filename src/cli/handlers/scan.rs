use crate::cli::args::{CountArgs, FindArgs, UpperArgs};
use crate::cli::global::GlobalArgs;
use crate::cli::input::read_input;
use std::io::{self, Write};
use swar_lanes::{ByteRange, SwarConfig, count_byte, parse_byte, positions_in_range, to_ascii_uppercase};

pub fn handle_count(
    args: CountArgs,
    global: &GlobalArgs,
    config: &SwarConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let needle = match &args.byte {
        Some(text) => parse_byte(text)?,
        None => config.needle()?,
    };
    let data = read_input(args.file.as_deref(), global)?;
    let count = count_byte(&data, needle);

    if args.json || config.json() {
        let output = serde_json::json!({
            "byte": needle,
            "count": count,
            "length": data.len(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", count);
    }
    Ok(())
}

pub fn handle_find(
    args: FindArgs,
    global: &GlobalArgs,
    config: &SwarConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let range = match &args.range {
        Some(text) => text.parse::<ByteRange>()?,
        None => config.range(),
    };
    let data = read_input(args.file.as_deref(), global)?;
    let positions = positions_in_range(&data, range);

    if args.json || config.json() {
        let output = serde_json::json!({
            "range": range,
            "positions": positions,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let joined: Vec<String> = positions.iter().map(|p| p.to_string()).collect();
        println!("{}", joined.join(","));
    }
    Ok(())
}

pub fn handle_upper(args: UpperArgs, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(args.file.as_deref(), global)?;
    io::stdout().write_all(&to_ascii_uppercase(&data))?;
    Ok(())
}
