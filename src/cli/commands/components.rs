//! Components command implementation

use anyhow::Result;
use clap::{ArgMatches, Command};
use std::path::Path;
use tracing::info;

pub fn command() -> Command {
    Command::new("components")
        .about("List the component schemas of an OpenAPI document")
        .arg(
            clap::Arg::new("schema")
                .help("OpenAPI document (.yaml, .yml or .json)")
                .value_name("SCHEMA")
                .required(true),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let schema_file = matches
        .get_one::<String>("schema")
        .map(Path::new)
        .ok_or(crate::ConvertError::NoInput)?;

    for name in list(schema_file)? {
        println!("{name}");
    }

    Ok(())
}

/// Component names of the document at `path`, sorted
pub fn list(path: &Path) -> Result<Vec<String>> {
    let document = openapi_model::load_file(path)?;
    let names: Vec<String> = document
        .component_names()
        .into_iter()
        .map(str::to_string)
        .collect();

    info!("Found {} component schemas in {}", names.len(), path.display());
    Ok(names)
}
