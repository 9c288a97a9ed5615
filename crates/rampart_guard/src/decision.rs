//! Threshold decisions.

use crate::CounterRecord;
use rampart_core::{ActionKind, Verdict};
use tracing::{info, instrument};

/// Turns a counter snapshot into a [`Verdict`].
///
/// Each kind is compared on its own; a mix of kinds below the threshold never
/// triggers, however large their sum.
#[derive(Debug, Clone, Copy)]
pub struct DecisionEngine {
    threshold: u32,
}

impl DecisionEngine {
    /// Create an engine with a per-kind threshold.
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    /// Configured threshold.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Decide whether the actor behind `record` must be contained for `kind`.
    ///
    /// A missing record (exempt actor) is always [`Verdict::None`].
    #[instrument(level = "debug", skip(self, record))]
    pub fn decide(&self, record: Option<&CounterRecord>, kind: ActionKind) -> Verdict {
        let Some(record) = record else {
            return Verdict::None;
        };

        let count = record.count(kind);
        if count < self.threshold {
            return Verdict::None;
        }

        info!(
            actor_id = %record.actor_id(),
            guild_id = %record.guild_id(),
            count,
            threshold = self.threshold,
            "Threshold reached"
        );

        Verdict::Contain {
            actor_id: *record.actor_id(),
            guild_id: *record.guild_id(),
            kind,
            epoch: *record.epoch(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExemptionSet, WindowTracker};
    use rampart_core::{ActionEvent, ActorId, GuildId};
    use std::time::{Duration, Instant};

    fn record_with(kinds: &[(ActionKind, u32)]) -> CounterRecord {
        let tracker = WindowTracker::new(ExemptionSet::default(), Duration::from_secs(10));
        let now = Instant::now();
        let mut last = None;
        for (kind, n) in kinds {
            for _ in 0..*n {
                let event = ActionEvent::new(ActorId::new(5), GuildId::new(100), *kind);
                last = tracker.observe(&event, None, now);
            }
        }
        last.unwrap()
    }

    #[test]
    fn test_below_threshold_is_none() {
        let engine = DecisionEngine::new(5);
        let record = record_with(&[(ActionKind::Ban, 4)]);
        assert_eq!(engine.decide(Some(&record), ActionKind::Ban), Verdict::None);
    }

    #[test]
    fn test_at_threshold_contains() {
        let engine = DecisionEngine::new(5);
        let record = record_with(&[(ActionKind::Kick, 5)]);
        let verdict = engine.decide(Some(&record), ActionKind::Kick);
        assert_eq!(
            verdict,
            Verdict::Contain {
                actor_id: ActorId::new(5),
                guild_id: GuildId::new(100),
                kind: ActionKind::Kick,
                epoch: *record.epoch(),
            }
        );
    }

    #[test]
    fn test_kinds_are_not_summed() {
        let engine = DecisionEngine::new(5);
        let record = record_with(&[
            (ActionKind::Ban, 4),
            (ActionKind::Kick, 4),
            (ActionKind::ChannelChange, 4),
            (ActionKind::RoleChange, 4),
        ]);
        assert_eq!(engine.decide(Some(&record), ActionKind::RoleChange), Verdict::None);
    }

    #[test]
    fn test_missing_record_is_none() {
        let engine = DecisionEngine::new(1);
        assert_eq!(engine.decide(None, ActionKind::Ban), Verdict::None);
    }
}
