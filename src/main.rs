use anyhow::Result;
use clap::Parser;
use quick_translate::cli::{self, Cli};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env file (optional; real environment wins)
    let _ = dotenvy::dotenv();

    // Initialize logging on stderr so stdout only carries results
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quick_translate=warn".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli::run(cli).await
}
