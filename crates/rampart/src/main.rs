//! Rampart CLI binary.
//!
//! - Run the anti-nuke bot against Discord
//! - Print the effective guard configuration

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_bot, show_config};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Run { config } => {
            run_bot(config.as_deref()).await?;
        }

        Commands::Config { config } => {
            show_config(config.as_deref())?;
        }
    }

    Ok(())
}
