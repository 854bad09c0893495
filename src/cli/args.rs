use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count occurrences of a byte
    Count(CountArgs),

    /// Report offsets of bytes inside an inclusive range
    Find(FindArgs),

    /// Convert ASCII letters to uppercase
    Upper(UpperArgs),

    /// Dump the input as packed lanes
    Lanes(LanesArgs),

    /// Evaluate one lane operation on hex operands
    Op(OpArgs),

    /// Show the effective configuration
    Config(ConfigArgs),
}

/// Arguments for counting a byte
#[derive(Args, Debug)]
pub struct CountArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Byte to count: a character, 0xNN, or 0-255 (default from config)
    #[arg(short = 'b', long)]
    pub byte: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for finding bytes in a range
#[derive(Args, Debug)]
pub struct FindArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Inclusive range such as A-Z or 0x30-0x39 (default from config)
    #[arg(short = 'r', long)]
    pub range: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for uppercasing
#[derive(Args, Debug)]
pub struct UpperArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,
}

/// Arguments for dumping lanes
#[derive(Args, Debug)]
pub struct LanesArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,
}

/// Arguments for evaluating a lane operation
#[derive(Args, Debug)]
pub struct OpArgs {
    /// Operation: equal, less, greater, add-wrap, sub-wrap, add-sat, sub-sat,
    /// abs-diff, min, max, average, swap-nibbles, reverse-bits, popcount,
    /// select, gather
    pub op: String,

    /// Lane operands as 16 hex digits each, lane 0 first
    #[arg(required = true)]
    pub lanes: Vec<String>,
}

/// Arguments for showing configuration
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Output as JSON instead of TOML
    #[arg(long)]
    pub json: bool,
}
