//! Init command implementation

use crate::config::DEFAULT_CONFIG_FILES;
use crate::Config;
use anyhow::{anyhow, Result};
use clap::{ArgMatches, Command};
use std::path::Path;
use tracing::info;

pub fn command() -> Command {
    Command::new("init")
        .about("Initialize a new configuration file")
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file path")
                .value_name("FILE")
                .default_value(DEFAULT_CONFIG_FILES[0]),
        )
        .arg(
            clap::Arg::new("force")
                .short('f')
                .long("force")
                .help("Overwrite an existing configuration file")
                .action(clap::ArgAction::SetTrue),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let output_path = matches
        .get_one::<String>("output")
        .map(Path::new)
        .ok_or_else(|| anyhow!("No output path given"))?;

    write_default_config(output_path, matches.get_flag("force"))?;

    println!("Configuration file created: {}", output_path.display());
    Ok(())
}

/// Write the default configuration to `path`
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(anyhow!(
            "{} already exists, use --force to overwrite it",
            path.display()
        ));
    }

    info!("Initializing configuration file: {}", path.display());
    Config::default().save_to_file(path)
}
