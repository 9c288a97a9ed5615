//! Discord bot client setup and lifecycle management.

use crate::{BotSettings, DiscordError, DiscordErrorKind, GuardHandler};
use rampart_guard::GuardConfig;
use serenity::Client;
use tracing::{info, instrument};

/// Discord bot running the anti-nuke guard.
///
/// # Example
/// ```no_run
/// use rampart_discord::{BotSettings, GuardBot};
/// use rampart_guard::GuardConfig;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = BotSettings::from_env()?;
/// let mut bot = GuardBot::new(&settings, GuardConfig::default()).await?;
/// bot.start().await?;
/// # Ok(())
/// # }
/// ```
pub struct GuardBot {
    client: Client,
}

impl GuardBot {
    /// Create a bot for `settings`.
    ///
    /// When `settings` names an owner id it is added to the exemptions.
    ///
    /// # Errors
    /// Returns an error if the Serenity client fails to initialize.
    #[instrument(skip(settings, config))]
    pub async fn new(settings: &BotSettings, config: GuardConfig) -> Result<Self, DiscordError> {
        info!("Initializing anti-nuke bot");

        let config = match settings.owner_id() {
            Some(owner) => config.with_exempt_id(*owner),
            None => config,
        };

        let intents = GuardHandler::intents();
        info!("Building Serenity client with intents: {:?}", intents);

        let client = Client::builder(settings.token(), intents)
            .event_handler(GuardHandler::new(config))
            .await
            .map_err(|e| {
                DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                    "Failed to build client: {}",
                    e
                )))
            })?;

        info!("Serenity client built successfully");
        Ok(Self { client })
    }

    /// Start the bot.
    ///
    /// Blocks until the gateway connection ends.
    ///
    /// # Errors
    /// Returns an error if the client fails to start or hits a fatal error.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> Result<(), DiscordError> {
        info!("Starting Discord bot");

        self.client.start().await.map_err(|e| {
            DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                "Client error: {}",
                e
            )))
        })?;

        Ok(())
    }
}
