//! Destructive administrative actions and the normalized event that carries them.

use crate::{ActorId, GuildId};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Kinds of destructive action that are counted.
///
/// Each kind is counted independently; kinds are never summed.
///
/// # Examples
///
/// ```
/// use rampart_core::ActionKind;
/// use strum::IntoEnumIterator;
///
/// assert_eq!(ActionKind::iter().count(), 4);
/// assert_eq!(ActionKind::ChannelChange.to_string(), "channel_change");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumCount,
)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// A member was banned
    #[display("ban")]
    Ban,
    /// A member was kicked
    #[display("kick")]
    Kick,
    /// A channel was created or deleted
    #[display("channel_change")]
    ChannelChange,
    /// A role was created or deleted
    #[display("role_change")]
    RoleChange,
}

impl ActionKind {
    /// Dense index of this kind, suitable for fixed-size count arrays.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Plural noun used in incident notifications ("mass-bans").
    pub const fn plural(self) -> &'static str {
        match self {
            ActionKind::Ban => "bans",
            ActionKind::Kick => "kicks",
            ActionKind::ChannelChange => "channel changes",
            ActionKind::RoleChange => "role changes",
        }
    }
}

/// A destructive action attributed to an actor in a guild.
///
/// Produced by an event normalizer once audit-log attribution succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct ActionEvent {
    /// Who performed the action
    actor_id: ActorId,
    /// Guild the action happened in
    guild_id: GuildId,
    /// What kind of action it was
    kind: ActionKind,
    /// The banned/kicked user, channel or role, when known
    #[setters(strip_option)]
    target_id: Option<u64>,
    /// When the platform reported the action
    occurred_at: DateTime<Utc>,
}

impl ActionEvent {
    /// Create an event stamped with the current UTC time.
    pub fn new(actor_id: ActorId, guild_id: GuildId, kind: ActionKind) -> Self {
        Self {
            actor_id,
            guild_id,
            kind,
            target_id: None,
            occurred_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_indices_are_dense() {
        let indices: Vec<usize> = ActionKind::iter().map(ActionKind::index).collect();
        assert_eq!(indices, (0..ActionKind::COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn test_event_setters() {
        let event = ActionEvent::new(ActorId::new(1), GuildId::new(2), ActionKind::Ban)
            .with_target_id(3);
        assert_eq!(*event.target_id(), Some(3));
        assert_eq!(*event.kind(), ActionKind::Ban);
    }
}
