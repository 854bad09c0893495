mod args;
mod global;
mod handlers;
mod input;

use args::Commands;
use clap::Parser;
use global::GlobalArgs;
use swar_lanes::SwarConfig;

#[derive(Parser)]
#[command(name = "swar")]
#[command(version)]
#[command(about = "Byte-lane toolkit: scan, transform and inspect data eight bytes at a time", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.global.no_color {
        swar_lanes::disable_color();
    }

    // Load configuration with user overrides
    let config = SwarConfig::load_with_overrides()?;

    match cli.command {
        Commands::Count(args) => handlers::scan::handle_count(args, &cli.global, &config),
        Commands::Find(args) => handlers::scan::handle_find(args, &cli.global, &config),
        Commands::Upper(args) => handlers::scan::handle_upper(args, &cli.global),
        Commands::Lanes(args) => handlers::lanes::handle_lanes(args, &cli.global),
        Commands::Op(args) => handlers::lanes::handle_op(args),
        Commands::Config(args) => handlers::config::handle(args, &config),
    }
}
