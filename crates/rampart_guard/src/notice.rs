//! Incident messages for the responsible party.

use rampart_core::{ActionKind, ActorId, GuildId, IncidentOutcome};

/// Renders the owner notification for one containment.
///
/// # Examples
///
/// ```
/// use rampart_core::{ActionKind, ActorId, GuildId, IncidentOutcome};
/// use rampart_guard::IncidentNotice;
///
/// let notice = IncidentNotice::new(
///     ActorId::new(42),
///     GuildId::new(7),
///     ActionKind::Ban,
///     IncidentOutcome::Succeeded,
/// );
/// assert!(notice.to_string().starts_with("**[Anti-Nuke Triggered]**"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentNotice {
    actor_id: ActorId,
    guild_id: GuildId,
    kind: ActionKind,
    outcome: IncidentOutcome,
}

impl IncidentNotice {
    /// Create a notice.
    pub fn new(
        actor_id: ActorId,
        guild_id: GuildId,
        kind: ActionKind,
        outcome: IncidentOutcome,
    ) -> Self {
        Self {
            actor_id,
            guild_id,
            kind,
            outcome,
        }
    }
}

impl std::fmt::Display for IncidentNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let actor = self.actor_id;
        let guild = self.guild_id;
        let plural = self.kind.plural();
        match &self.outcome {
            IncidentOutcome::Succeeded => write!(
                f,
                "**[Anti-Nuke Triggered]** User <@{actor}> (`{actor}`) was automatically \
                 banned from guild `{guild}` for mass-{plural}."
            ),
            IncidentOutcome::Forbidden => write!(
                f,
                "**[Anti-Nuke Failed]** Could not contain user <@{actor}> (`{actor}`) in guild \
                 `{guild}` after mass-{plural}: the bot lacks the necessary permissions. \
                 Please review my permissions immediately."
            ),
            IncidentOutcome::Errored(detail) => write!(
                f,
                "**[Anti-Nuke Error]** Containment of user <@{actor}> (`{actor}`) in guild \
                 `{guild}` after mass-{plural} failed: `{detail}`"
            ),
        }
    }
}
