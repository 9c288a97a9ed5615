//! Rampart - anti-nuke guard for Discord guilds.
//!
//! Rampart watches a guild's audit log for bursts of destructive administrative
//! actions (bans, kicks, channel and role changes). When one actor performs the
//! same kind of action too many times inside a short window, the actor is
//! banned, stripped of administrative roles, and the guild owner is told.
//!
//! # Architecture
//!
//! - `rampart_error` - Error types
//! - `rampart_core` - Shared data model (ids, events, verdicts, directives)
//! - `rampart_guard` - Detection and containment engine
//! - `rampart_discord` - Discord collaborators built on serenity
//!
//! This crate (`rampart`) re-exports everything for convenience.

pub use rampart_core::*;
pub use rampart_discord::{
    BotSettings, DiscordError, DiscordErrorKind, DiscordResult, GuardBot, GuardHandler,
    SerenityPlatform,
};
pub use rampart_error::*;
pub use rampart_guard::{
    ActionCounts, AntiNuke, Clock, ContainmentExecutor, CounterRecord, DecisionEngine,
    Exemption, ExemptionSet, GuardConfig, GuardHandle, GuardMessage, GuardMetrics,
    GuardMetricsSnapshot, GuardService, GuildPlatform, IncidentNotice, IncidentReport,
    SystemClock, WindowTracker,
};
