//! Audit-log entries to guard events.
//!
//! Only four families of audit action are counted; everything else the
//! gateway reports is ignored here.

use chrono::{DateTime, Utc};
use rampart_core::{ActionEvent, ActionKind, ActorId, GuildId};
use serenity::model::guild::audit_log::{
    Action, AuditLogEntry, ChannelAction, MemberAction, RoleAction,
};
use serenity::model::id::GuildId as SerenityGuildId;
use tracing::trace;

/// Map an audit-log action onto the kind it counts toward.
///
/// Channel and role creations count alongside deletions.
///
/// # Examples
///
/// ```
/// use rampart_core::ActionKind;
/// use rampart_discord::classify;
/// use serenity::model::guild::audit_log::{Action, MemberAction};
///
/// assert_eq!(classify(&Action::Member(MemberAction::BanAdd)), Some(ActionKind::Ban));
/// assert_eq!(classify(&Action::Member(MemberAction::BanRemove)), None);
/// ```
pub fn classify(action: &Action) -> Option<ActionKind> {
    match action {
        Action::Member(MemberAction::BanAdd) => Some(ActionKind::Ban),
        Action::Member(MemberAction::Kick) => Some(ActionKind::Kick),
        Action::Channel(ChannelAction::Create | ChannelAction::Delete) => {
            Some(ActionKind::ChannelChange)
        }
        Action::Role(RoleAction::Create | RoleAction::Delete) => Some(ActionKind::RoleChange),
        _ => None,
    }
}

/// Build an [`ActionEvent`] from a gateway audit-log entry.
///
/// Returns `None` for actions that are not counted.
pub fn normalize(guild_id: SerenityGuildId, entry: &AuditLogEntry) -> Option<ActionEvent> {
    let Some(kind) = classify(&entry.action) else {
        trace!(action = ?entry.action, "Ignoring audit action");
        return None;
    };

    let occurred_at = DateTime::<Utc>::from_timestamp(entry.id.created_at().unix_timestamp(), 0)
        .unwrap_or_else(Utc::now);

    let event = ActionEvent::new(
        ActorId::new(entry.user_id.get()),
        GuildId::new(guild_id.get()),
        kind,
    )
    .with_occurred_at(occurred_at);

    Some(match entry.target_id {
        Some(target) => event.with_target_id(target.get()),
        None => event,
    })
}
