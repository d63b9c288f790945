//! openapi-to-json-schema CLI binary

use anyhow::Result;

use openapi_to_json_schema::cli::CliApp;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the schema
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "openapi_to_json_schema=info".into()),
        )
        .init();

    // Parse command line arguments
    let matches = CliApp::app().get_matches();

    // Run the CLI application
    CliApp::run(&matches).await
}
