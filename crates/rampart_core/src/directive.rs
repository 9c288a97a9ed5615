//! Directives sent to the platform-action collaborator.

use crate::{ActorId, GuildId, RoleId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single platform action issued during containment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "directive", rename_all = "snake_case")]
pub enum Directive {
    /// Remove the actor from the guild (ban-equivalent)
    RevokeMembership {
        /// Guild to act in
        guild_id: GuildId,
        /// Actor to remove
        actor_id: ActorId,
        /// Audit reason attached to the action
        reason: String,
    },
    /// Remove role grants carrying administrative capability
    StripCapabilityRoles {
        /// Guild to act in
        guild_id: GuildId,
        /// Actor holding the roles
        actor_id: ActorId,
        /// Roles to remove
        roles: BTreeSet<RoleId>,
    },
    /// Deliver an incident message to the guild's responsible party
    NotifyResponsibleParty {
        /// Guild the incident happened in
        guild_id: GuildId,
        /// Message text
        message: String,
    },
}

impl Directive {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Directive::RevokeMembership { .. } => "revoke_membership",
            Directive::StripCapabilityRoles { .. } => "strip_capability_roles",
            Directive::NotifyResponsibleParty { .. } => "notify_responsible_party",
        }
    }
}

/// Classified result of executing a [`Directive`].
///
/// Collaborators never raise: every failure is mapped onto one of these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum DirectiveOutcome {
    /// The platform accepted the action
    #[display("ok")]
    Ok,
    /// The bot lacks the privilege for the action
    #[display("forbidden")]
    Forbidden,
    /// The platform call failed for another reason
    #[display("error: {}", _0)]
    Error(String),
}

impl DirectiveOutcome {
    /// Whether the directive went through.
    pub fn is_ok(&self) -> bool {
        matches!(self, DirectiveOutcome::Ok)
    }
}
