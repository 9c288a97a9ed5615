//! Real-time anti-nuke detection and containment.
//!
//! Destructive administrative actions (bans, kicks, channel and role changes)
//! arrive as an asynchronous stream of [`ActionEvent`]s. The guard counts them
//! per actor and guild inside a fixed time window and, once one kind reaches
//! the configured threshold, contains the actor exactly once.
//!
//! # Architecture
//!
//! Data flows one way through four stages:
//!
//! 1. **Exemption** - configured operators and the guild's current owner are skipped
//! 2. **Window Tracker** - per-(actor, guild) counters with a hard window reset
//! 3. **Decision Engine** - per-kind threshold check producing a [`Verdict`]
//! 4. **Containment Executor** - revoke membership, strip capability roles,
//!    notify the guild owner, each step attempted regardless of the others
//!
//! [`AntiNuke`] wires the stages together and [`GuardService`] runs it as a
//! background task fed through a channel.
//!
//! [`ActionEvent`]: rampart_core::ActionEvent
//! [`Verdict`]: rampart_core::Verdict

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod clock;
mod config;
mod containment;
mod decision;
mod exemption;
mod guard;
mod metrics;
mod notice;
mod platform;
mod service;
mod tracker;

#[cfg(any(test, feature = "test-helpers"))]
pub mod mocks;

pub use clock::{Clock, SystemClock};
pub use config::GuardConfig;
pub use containment::{ContainmentExecutor, IncidentReport};
pub use decision::DecisionEngine;
pub use exemption::{Exemption, ExemptionSet};
pub use guard::AntiNuke;
pub use metrics::{GuardMetrics, GuardMetricsSnapshot, IncidentCounts};
pub use notice::IncidentNotice;
pub use platform::GuildPlatform;
pub use service::{GuardHandle, GuardMessage, GuardService};
pub use tracker::{ActionCounts, CounterRecord, WindowTracker};
