//! Boundary to the chat platform.

use async_trait::async_trait;
use rampart_core::{ActorId, Directive, DirectiveOutcome, GuildId, RoleId};
use rampart_error::PlatformResult;
use std::collections::BTreeSet;

/// Platform operations the guard needs.
///
/// Implementations classify every failure; `execute` never returns an error,
/// it reports [`DirectiveOutcome::Forbidden`] or [`DirectiveOutcome::Error`].
#[async_trait]
pub trait GuildPlatform: Send + Sync {
    /// Current owner of the guild, if it can be determined.
    async fn guild_owner(&self, guild_id: GuildId) -> Option<ActorId>;

    /// Roles held by `actor_id` that carry administrative capability.
    async fn capability_roles(
        &self,
        guild_id: GuildId,
        actor_id: ActorId,
    ) -> PlatformResult<BTreeSet<RoleId>>;

    /// Carry out one directive.
    async fn execute(&self, directive: &Directive) -> DirectiveOutcome;
}
