//! Detection verdicts.

use crate::{ActionKind, ActorId, GuildId};
use serde::{Deserialize, Serialize};

/// Result of applying the threshold to a counter snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// Nothing to do
    None,
    /// The actor crossed the threshold for `kind` and must be contained
    Contain {
        /// Offending actor
        actor_id: ActorId,
        /// Guild the burst happened in
        guild_id: GuildId,
        /// Kind whose count reached the threshold
        kind: ActionKind,
        /// Identity of the counter record the verdict was taken on
        epoch: u64,
    },
}

impl Verdict {
    /// Whether this verdict requires containment.
    pub fn is_contain(&self) -> bool {
        matches!(self, Verdict::Contain { .. })
    }
}
