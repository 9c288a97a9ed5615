//! The `run` command.

use super::load_config;
use rampart_discord::{BotSettings, GuardBot};
use std::path::Path;
use tracing::{info, instrument};

/// Connect to Discord and run the guard until the gateway closes.
#[instrument]
pub async fn run_bot(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let settings = BotSettings::from_env()?;

    info!(
        threshold = config.action_threshold(),
        window_secs = config.time_window_secs(),
        owner_exempt = settings.owner_id().is_some(),
        "Starting anti-nuke bot"
    );

    let mut bot = GuardBot::new(&settings, config).await?;
    bot.start().await?;

    Ok(())
}
