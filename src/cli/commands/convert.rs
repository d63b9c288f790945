//! Convert command implementation

use crate::cli::utils;
use crate::{ConvertError, SchemaExtractor};
use anyhow::Result;
use clap::{ArgMatches, Command};
use std::path::Path;
use tracing::info;

pub fn command() -> Command {
    let command = Command::new("convert")
        .visible_alias("c")
        .about("Convert a component of an OpenAPI schema file into a JSON schema")
        .arg(
            clap::Arg::new("schema")
                .help("OpenAPI document (.yaml, .yml or .json)")
                .value_name("SCHEMA")
                .required(true),
        );

    utils::conversion_args(command)
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let app = utils::create_app(matches)?;
    let schema_file = matches.get_one::<String>("schema").map(Path::new);

    let rendered = execute(&app, schema_file).await?;

    if let Some(path) = app.emit(&rendered)? {
        info!("JSON schema written to {}", path.display());
    }

    Ok(())
}

/// Load the document from `schema_file` or piped stdin and render the schema
pub async fn execute(app: &SchemaExtractor, schema_file: Option<&Path>) -> Result<String> {
    info!(
        "Converting component '{}'",
        app.config().conversion.component
    );

    let document = match schema_file {
        Some(path) => app.load_file(path)?,
        None if crate::utils::stdin_is_piped() => {
            info!("Reading OpenAPI document from stdin");
            let content = crate::utils::read_stdin().await?;
            app.load_bytes(&content)?
        }
        None => return Err(ConvertError::NoInput.into()),
    };

    let schema = app.convert(&document)?;
    Ok(app.render(&schema)?)
}
