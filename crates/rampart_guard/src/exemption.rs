//! Actors that are never counted or contained.

use rampart_core::ActorId;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Why an actor was exempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Exemption {
    /// Listed in the configured operator ids
    #[display("operator")]
    Operator,
    /// Currently owns the guild
    #[display("guild owner")]
    GuildOwner,
}

/// Static operator ids plus the dynamic guild-owner rule.
///
/// The static part is fixed for the life of the process; the owner is
/// supplied by the caller on every check because ownership can change.
#[derive(Debug, Clone, Default)]
pub struct ExemptionSet {
    operators: HashSet<ActorId>,
}

impl ExemptionSet {
    /// Create an exemption set from operator ids.
    pub fn new(operators: impl IntoIterator<Item = ActorId>) -> Self {
        Self {
            operators: operators.into_iter().collect(),
        }
    }

    /// Check whether `actor_id` is exempt given the guild's current owner.
    #[instrument(level = "trace", skip(self))]
    pub fn check(&self, actor_id: ActorId, guild_owner: Option<ActorId>) -> Option<Exemption> {
        if self.operators.contains(&actor_id) {
            debug!("Actor is a configured operator");
            return Some(Exemption::Operator);
        }
        if guild_owner == Some(actor_id) {
            debug!("Actor owns the guild");
            return Some(Exemption::GuildOwner);
        }
        None
    }

    /// Shorthand for `check(..).is_some()`.
    pub fn is_exempt(&self, actor_id: ActorId, guild_owner: Option<ActorId>) -> bool {
        self.check(actor_id, guild_owner).is_some()
    }

    /// Whether `actor_id` is a configured operator.
    pub fn is_operator(&self, actor_id: ActorId) -> bool {
        self.operators.contains(&actor_id)
    }

    /// Number of configured operators.
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Whether no operators are configured.
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set() -> ExemptionSet {
        ExemptionSet::new([ActorId::new(1), ActorId::new(2)])
    }

    #[test]
    fn test_operator_is_exempt() {
        assert_eq!(set().check(ActorId::new(1), None), Some(Exemption::Operator));
    }

    #[test]
    fn test_owner_is_exempt() {
        let owner = ActorId::new(99);
        assert_eq!(set().check(owner, Some(owner)), Some(Exemption::GuildOwner));
    }

    #[test]
    fn test_other_actor_is_not_exempt() {
        assert!(!set().is_exempt(ActorId::new(3), Some(ActorId::new(99))));
        assert!(!set().is_exempt(ActorId::new(3), None));
    }

    #[test]
    fn test_operator_wins_over_owner() {
        let actor = ActorId::new(2);
        assert_eq!(set().check(actor, Some(actor)), Some(Exemption::Operator));
    }
}
