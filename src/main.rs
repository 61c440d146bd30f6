use clap::Parser;
use tracing::info;

mod cli;
mod config;
mod core;
mod sources;
mod utils;

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize tracing
    cli.init_tracing()?;

    info!("Starting ytinfo v{}", env!("CARGO_PKG_VERSION"));

    // Handle the command
    cli.run().await?;

    Ok(())
}
