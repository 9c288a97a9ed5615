//! Guild operations over serenity's HTTP client and cache.

use async_trait::async_trait;
use rampart_core::{ActorId, Directive, DirectiveOutcome, GuildId, RoleId};
use rampart_error::{PlatformError, PlatformErrorKind, PlatformResult};
use rampart_guard::GuildPlatform;
use serenity::builder::CreateMessage;
use serenity::cache::Cache;
use serenity::http::Http;
use serenity::model::ModelError;
use serenity::model::id::{
    GuildId as SerenityGuildId, RoleId as SerenityRoleId, UserId as SerenityUserId,
};
use serenity::model::permissions::Permissions;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Permissions that make a role worth stripping.
const CAPABILITY_PERMISSIONS: Permissions = Permissions::ADMINISTRATOR
    .union(Permissions::MANAGE_CHANNELS)
    .union(Permissions::MANAGE_ROLES);

/// Whether a role with `permissions` can be used to nuke a guild.
///
/// # Examples
///
/// ```
/// use rampart_discord::is_capability_role;
/// use serenity::model::permissions::Permissions;
///
/// assert!(is_capability_role(Permissions::MANAGE_ROLES | Permissions::SEND_MESSAGES));
/// assert!(!is_capability_role(Permissions::KICK_MEMBERS));
/// ```
pub fn is_capability_role(permissions: Permissions) -> bool {
    permissions.intersects(CAPABILITY_PERMISSIONS)
}

/// [`GuildPlatform`] backed by a live Discord connection.
#[derive(Clone)]
pub struct SerenityPlatform {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl std::fmt::Debug for SerenityPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerenityPlatform").finish_non_exhaustive()
    }
}

impl SerenityPlatform {
    /// Create a platform from the client's HTTP handle and cache.
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }

    async fn ban(&self, guild_id: GuildId, actor_id: ActorId, reason: &str) -> DirectiveOutcome {
        match self
            .http
            .ban_user(guild(guild_id), user(actor_id), 0, Some(reason))
            .await
        {
            Ok(()) => DirectiveOutcome::Ok,
            Err(e) => outcome_from(classify_error(&e)),
        }
    }

    async fn strip_roles(
        &self,
        guild_id: GuildId,
        actor_id: ActorId,
        roles: &BTreeSet<RoleId>,
    ) -> DirectiveOutcome {
        let reason = "Anti-nuke: stripping capability roles";
        let mut first_failure = None;

        for role_id in roles {
            let result = self
                .http
                .remove_member_role(
                    guild(guild_id),
                    user(actor_id),
                    SerenityRoleId::new(role_id.get()),
                    Some(reason),
                )
                .await;

            match result.map_err(|e| classify_error(&e)) {
                Ok(()) => debug!(%role_id, "Role removed"),
                // A banned member no longer holds any roles.
                Err(e) if matches!(e.kind(), PlatformErrorKind::NotFound(_)) => {
                    debug!(%role_id, "Member already gone, nothing to strip");
                }
                Err(e) => {
                    warn!(%role_id, error = %e, "Role removal failed");
                    first_failure.get_or_insert(e);
                }
            }
        }

        first_failure.map_or(DirectiveOutcome::Ok, outcome_from)
    }

    async fn notify_owner(&self, guild_id: GuildId, message: &str) -> DirectiveOutcome {
        let Some(owner) = self.guild_owner(guild_id).await else {
            return DirectiveOutcome::Error(format!("owner of guild {} unknown", guild_id));
        };

        let builder = CreateMessage::new().content(message);
        match user(owner)
            .direct_message((&self.cache, self.http.as_ref()), builder)
            .await
        {
            Ok(_) => DirectiveOutcome::Ok,
            Err(e) => outcome_from(classify_error(&e)),
        }
    }
}

#[async_trait]
impl GuildPlatform for SerenityPlatform {
    #[instrument(level = "debug", skip(self))]
    async fn guild_owner(&self, guild_id: GuildId) -> Option<ActorId> {
        let cached = self
            .cache
            .guild(guild(guild_id))
            .map(|g| ActorId::new(g.owner_id.get()));
        if cached.is_some() {
            return cached;
        }

        match self.http.get_guild(guild(guild_id)).await {
            Ok(partial) => Some(ActorId::new(partial.owner_id.get())),
            Err(e) => {
                warn!(error = %e, "Guild owner lookup failed");
                None
            }
        }
    }

    #[instrument(level = "debug", skip(self))]
    async fn capability_roles(
        &self,
        guild_id: GuildId,
        actor_id: ActorId,
    ) -> PlatformResult<BTreeSet<RoleId>> {
        let member = self
            .http
            .get_member(guild(guild_id), user(actor_id))
            .await
            .map_err(|e| classify_error(&e))?;
        let roles = self
            .http
            .get_guild_roles(guild(guild_id))
            .await
            .map_err(|e| classify_error(&e))?;

        let held: BTreeSet<RoleId> = roles
            .iter()
            .filter(|role| member.roles.contains(&role.id))
            .filter(|role| is_capability_role(role.permissions))
            .map(|role| RoleId::new(role.id.get()))
            .collect();

        debug!(count = held.len(), "Capability roles found");
        Ok(held)
    }

    #[instrument(level = "debug", skip(self, directive), fields(directive = directive.name()))]
    async fn execute(&self, directive: &Directive) -> DirectiveOutcome {
        match directive {
            Directive::RevokeMembership {
                guild_id,
                actor_id,
                reason,
            } => self.ban(*guild_id, *actor_id, reason).await,
            Directive::StripCapabilityRoles {
                guild_id,
                actor_id,
                roles,
            } => self.strip_roles(*guild_id, *actor_id, roles).await,
            Directive::NotifyResponsibleParty { guild_id, message } => {
                self.notify_owner(*guild_id, message).await
            }
        }
    }
}

fn guild(id: GuildId) -> SerenityGuildId {
    SerenityGuildId::new(id.get())
}

fn user(id: ActorId) -> SerenityUserId {
    SerenityUserId::new(id.get())
}

/// Sort a serenity failure into the platform error classes.
fn classify_error(err: &serenity::Error) -> PlatformError {
    let detail = err.to_string();
    let kind = match err {
        serenity::Error::Http(http) => match http.status_code().map(|s| s.as_u16()) {
            Some(403) => PlatformErrorKind::Forbidden(detail),
            Some(404) => PlatformErrorKind::NotFound(detail),
            _ => PlatformErrorKind::Request(detail),
        },
        serenity::Error::Model(ModelError::InvalidPermissions { .. }) => {
            PlatformErrorKind::Forbidden(detail)
        }
        _ => PlatformErrorKind::Request(detail),
    };
    PlatformError::new(kind)
}

fn outcome_from(err: PlatformError) -> DirectiveOutcome {
    match err.kind() {
        PlatformErrorKind::Forbidden(_) => DirectiveOutcome::Forbidden,
        other => DirectiveOutcome::Error(other.to_string()),
    }
}
