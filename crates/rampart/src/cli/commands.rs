//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rampart - anti-nuke guard for Discord guilds
#[derive(Parser, Debug)]
#[command(name = "rampart")]
#[command(about = "Anti-nuke guard for Discord guilds", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Connect to Discord and guard every guild the bot is in
    Run {
        /// Configuration file (defaults to layered rampart.toml lookup)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the effective configuration as JSON
    Config {
        /// Configuration file (defaults to layered rampart.toml lookup)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_accepts_config_path() {
        let cli = Cli::parse_from(["rampart", "run", "--config", "guard.toml", "-v"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Run { config } => assert_eq!(config, Some(PathBuf::from("guard.toml"))),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
