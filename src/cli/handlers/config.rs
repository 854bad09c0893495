use crate::cli::args::ConfigArgs;
use swar_lanes::SwarConfig;

pub fn handle(args: ConfigArgs, config: &SwarConfig) -> Result<(), Box<dyn std::error::Error>> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    print!("{}", toml::to_string(config)?);
    if let Some(path) = SwarConfig::user_config_path() {
        println!();
        println!("# user overrides: {}", path.display());
    }
    Ok(())
}
