//! Core data types for the Rampart anti-nuke guard.
//!
//! This crate provides the vocabulary shared between the detection engine and
//! the platform collaborators: opaque identities, the destructive action kinds
//! that are counted, the normalized inbound event, the detection verdict, and
//! the outbound containment directives with their classified results.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod action;
mod directive;
mod ids;
mod outcome;
mod verdict;

pub use action::{ActionEvent, ActionKind};
pub use directive::{Directive, DirectiveOutcome};
pub use ids::{ActorId, GuildId, RoleId};
pub use outcome::IncidentOutcome;
pub use verdict::Verdict;
