use anyhow::Result;
use clap::Parser;
use paysplit::cli::Cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut logger = pretty_env_logger::formatted_builder();
    if let Ok(filter) = std::env::var("RUST_LOG") {
        logger.parse_filters(&filter);
    } else if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    } else {
        logger.filter_level(log::LevelFilter::Warn);
    }
    logger.init();

    cli.run().await
}
