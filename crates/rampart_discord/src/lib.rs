//! Discord collaborators for the Rampart anti-nuke guard.
//!
//! # Architecture
//!
//! - **normalizer**: audit-log entries to [`rampart_core::ActionEvent`]s
//! - **platform**: [`rampart_guard::GuildPlatform`] backed by serenity's HTTP client and cache
//! - **handler**: gateway event handler feeding the guard service
//! - **client**: serenity client setup and lifecycle
//! - **settings**: credentials read from the environment
//!
//! # Usage
//!
//! ```no_run
//! use rampart_discord::{BotSettings, GuardBot};
//! use rampart_guard::GuardConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = BotSettings::from_env()?;
//!     let config = GuardConfig::load()?;
//!
//!     let mut bot = GuardBot::new(&settings, config).await?;
//!     bot.start().await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod error;
mod handler;
mod normalizer;
mod platform;
mod settings;

pub use client::GuardBot;
pub use error::{DiscordError, DiscordErrorKind, DiscordResult};
pub use handler::GuardHandler;
pub use normalizer::{classify, normalize};
pub use platform::{SerenityPlatform, is_capability_role};
pub use settings::BotSettings;
