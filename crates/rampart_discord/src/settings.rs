//! Credentials from the environment.

use crate::{DiscordError, DiscordErrorKind, DiscordResult};
use derive_getters::Getters;
use rampart_core::ActorId;
use tracing::{debug, instrument};

/// Bot credentials.
///
/// Read from `DISCORD_TOKEN` and `OWNER_ID`; a `.env` file in the working
/// directory is honored.
#[derive(Clone, Getters)]
pub struct BotSettings {
    token: String,
    owner_id: Option<ActorId>,
}

impl std::fmt::Debug for BotSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotSettings")
            .field("token", &"<redacted>")
            .field("owner_id", &self.owner_id)
            .finish()
    }
}

impl BotSettings {
    /// Create settings directly.
    pub fn new(token: impl Into<String>, owner_id: Option<ActorId>) -> Self {
        Self {
            token: token.into(),
            owner_id,
        }
    }

    /// Read settings from the environment.
    ///
    /// # Errors
    /// Returns an error if `DISCORD_TOKEN` is missing or `OWNER_ID` is not a number.
    #[instrument]
    pub fn from_env() -> DiscordResult<Self> {
        if dotenvy::dotenv().is_ok() {
            debug!("Loaded .env file");
        }

        let token = std::env::var("DISCORD_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| DiscordError::new(DiscordErrorKind::MissingToken))?;

        let owner_id = match std::env::var("OWNER_ID") {
            Ok(raw) => Some(parse_owner_id(&raw)?),
            Err(_) => None,
        };

        Ok(Self::new(token, owner_id))
    }
}

fn parse_owner_id(raw: &str) -> DiscordResult<ActorId> {
    raw.trim()
        .parse::<u64>()
        .map(ActorId::new)
        .map_err(|_| DiscordError::new(DiscordErrorKind::InvalidOwnerId(raw.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_id_parses_snowflake() {
        let owner = parse_owner_id(" 80351110224678912 ").unwrap();
        assert_eq!(owner, ActorId::new(80351110224678912));
    }

    #[test]
    fn test_owner_id_rejects_garbage() {
        let err = parse_owner_id("me").unwrap_err();
        assert_eq!(*err.kind(), DiscordErrorKind::InvalidOwnerId("me".into()));
    }

    #[test]
    fn test_debug_hides_token() {
        let settings = BotSettings::new("secret-token", None);
        assert!(!format!("{:?}", settings).contains("secret-token"));
    }
}
