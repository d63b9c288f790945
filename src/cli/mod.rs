//! CLI command implementations

use anyhow::Result;
use clap::{ArgMatches, Command};

pub mod commands;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Create the CLI application
    pub fn app() -> Command {
        let root = Command::new("openapi-to-json-schema")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Extract a component from an OpenAPI schema into a JSON schema")
            .subcommand_negates_reqs(true)
            .args_conflicts_with_subcommands(true)
            .arg(
                clap::Arg::new("schema")
                    .help("OpenAPI document (.yaml, .yml or .json); read from stdin when omitted")
                    .value_name("SCHEMA"),
            );

        utils::conversion_args(root)
            .subcommand(commands::convert::command())
            .subcommand(commands::components::command())
            .subcommand(commands::init::command())
            .subcommand(commands::info::command())
    }

    /// Run the CLI application
    pub async fn run(matches: &ArgMatches) -> Result<()> {
        match matches.subcommand() {
            Some(("convert", sub_matches)) => commands::convert::run(sub_matches).await,
            Some(("components", sub_matches)) => commands::components::run(sub_matches).await,
            Some(("init", sub_matches)) => commands::init::run(sub_matches).await,
            Some(("info", sub_matches)) => commands::info::run(sub_matches).await,
            // Without a subcommand the root behaves like `convert`
            _ => commands::convert::run(matches).await,
        }
    }
}

/// Common CLI utilities
pub mod utils {
    use anyhow::Result;
    use clap::{Arg, ArgAction, ArgMatches, Command};
    use std::path::{Path, PathBuf};

    use crate::Config;

    /// Attach the flags shared by the root command and `convert`
    pub fn conversion_args(command: Command) -> Command {
        command
            .arg(
                Arg::new("config")
                    .long("config")
                    .help("Configuration file path")
                    .value_name("FILE"),
            )
            .arg(
                Arg::new("component")
                    .short('c')
                    .long("component")
                    .help("Single component of the OpenAPI schema to convert [default: dataValues]")
                    .value_name("NAME"),
            )
            .arg(
                Arg::new("id")
                    .short('i')
                    .long("id")
                    .help("ID of the JSON schema")
                    .value_name("ID"),
            )
            .arg(
                Arg::new("output")
                    .short('o')
                    .long("output")
                    .help("Output file. If not set, output is written to stdout")
                    .value_name("FILE"),
            )
            .arg(
                Arg::new("compact")
                    .long("compact")
                    .help("Write the schema on a single line")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("indent")
                    .long("indent")
                    .help("Spaces per indentation level")
                    .value_name("N")
                    .value_parser(clap::value_parser!(usize)),
            )
            .arg(
                Arg::new("strict")
                    .long("strict")
                    .help("Fail if the component does not exist instead of writing an empty schema")
                    .action(ArgAction::SetTrue),
            )
    }

    /// Load configuration from `--config`, a default file, or defaults
    pub fn load_config(matches: &ArgMatches) -> Result<Config> {
        match matches.get_one::<String>("config") {
            Some(config_path) => Config::from_file(Path::new(config_path)),
            None => Config::discover(Path::new(".")),
        }
    }

    /// Apply command line overrides on top of a loaded configuration
    pub fn apply_overrides(config: &mut Config, matches: &ArgMatches) {
        if let Some(component) = matches.get_one::<String>("component") {
            config.conversion.component = component.clone();
        }

        if let Some(id) = matches.get_one::<String>("id") {
            config.conversion.id = id.clone();
        }

        if let Some(output) = matches.get_one::<String>("output") {
            config.output.path = Some(PathBuf::from(output));
        }

        if matches.get_flag("compact") {
            config.output.compact = true;
        }

        if let Some(indent) = matches.get_one::<usize>("indent") {
            config.output.indent = *indent;
        }

        if matches.get_flag("strict") {
            config.conversion.strict = true;
        }
    }

    /// Create a SchemaExtractor from the parsed arguments
    pub fn create_app(matches: &ArgMatches) -> Result<crate::SchemaExtractor> {
        let mut config = load_config(matches)?;
        apply_overrides(&mut config, matches);
        Ok(crate::SchemaExtractor::new(config)?)
    }
}
