//! Info command implementation

use crate::config::DEFAULT_CONFIG_FILES;
use crate::convert::DEFAULT_COMPONENT;
use anyhow::Result;
use clap::{ArgMatches, Command};
use jsonschema_model::{DEFAULT_ID, DRAFT_2020_12};

pub fn command() -> Command {
    Command::new("info").about("Show tool information").arg(
        clap::Arg::new("detailed")
            .short('d')
            .long("detailed")
            .help("Show detailed information")
            .action(clap::ArgAction::SetTrue),
    )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    println!("openapi-to-json-schema - OpenAPI component to JSON Schema converter");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!("Output draft: {DRAFT_2020_12}");

    if matches.get_flag("detailed") {
        println!("\nDefaults:");
        println!("  Component: {DEFAULT_COMPONENT}");
        println!("  Schema id: {DEFAULT_ID}");
        println!("  Config files: {}", DEFAULT_CONFIG_FILES.join(", "));
        println!("\nRequired properties are inferred from positive minLength, minimum,");
        println!("minItems or minProperties, or an enum whose values exclude the default.");
    }

    Ok(())
}
