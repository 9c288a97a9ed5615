//! Per-(actor, guild) sliding-window counters.
//!
//! Records live in a sharded [`DashMap`], so updates for unrelated pairs
//! proceed in parallel while updates for the same pair are serialized by the
//! shard lock. The lock is only held for the synchronous
//! reset-then-increment step and never across an `.await`.

use crate::ExemptionSet;
use dashmap::DashMap;
use derive_getters::Getters;
use rampart_core::{ActionEvent, ActionKind, ActorId, GuildId};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use strum::{EnumCount, IntoEnumIterator};
use tracing::{debug, instrument, trace};

/// Count per [`ActionKind`]. Every kind is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ActionCounts([u32; ActionKind::COUNT]);

impl ActionCounts {
    /// Count for one kind.
    pub fn get(&self, kind: ActionKind) -> u32 {
        self.0[kind.index()]
    }

    /// Add one to `kind` and return the new count.
    fn increment(&mut self, kind: ActionKind) -> u32 {
        let slot = &mut self.0[kind.index()];
        *slot = slot.saturating_add(1);
        *slot
    }

    /// Zero every kind together.
    fn reset(&mut self) {
        self.0 = [0; ActionKind::COUNT];
    }

    /// Whether every kind is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|count| *count == 0)
    }

    /// Iterate `(kind, count)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ActionKind, u32)> + '_ {
        ActionKind::iter().map(|kind| (kind, self.get(kind)))
    }
}

/// Counter state for one actor in one guild.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct CounterRecord {
    /// Actor being counted
    actor_id: ActorId,
    /// Guild the actions happened in
    guild_id: GuildId,
    /// Per-kind counts in the current window
    counts: ActionCounts,
    /// Instant of the first action counted in the current window
    window_start: Instant,
    /// Process-unique identity of this record
    epoch: u64,
}

impl CounterRecord {
    fn new(actor_id: ActorId, guild_id: GuildId, now: Instant, epoch: u64) -> Self {
        Self {
            actor_id,
            guild_id,
            counts: ActionCounts::default(),
            window_start: now,
            epoch,
        }
    }

    /// Count for one kind.
    pub fn count(&self, kind: ActionKind) -> u32 {
        self.counts.get(kind)
    }

    /// Whether more than `window` has passed since the window opened.
    ///
    /// An instant earlier than `window_start` counts as no time passed.
    pub fn is_expired(&self, now: Instant, window: Duration) -> bool {
        now.saturating_duration_since(self.window_start) > window
    }

    /// Whether any kind has reached `threshold`.
    pub fn has_reached(&self, threshold: u32) -> bool {
        self.counts.iter().any(|(_, count)| count >= threshold)
    }

    fn reset(&mut self, now: Instant) {
        self.counts.reset();
        self.window_start = now;
    }
}

type RecordKey = (ActorId, GuildId);

/// Concurrent store of [`CounterRecord`]s.
#[derive(Debug)]
pub struct WindowTracker {
    records: DashMap<RecordKey, CounterRecord>,
    exemptions: ExemptionSet,
    window: Duration,
    next_epoch: AtomicU64,
}

impl WindowTracker {
    /// Create an empty tracker.
    pub fn new(exemptions: ExemptionSet, window: Duration) -> Self {
        Self {
            records: DashMap::new(),
            exemptions,
            window,
            next_epoch: AtomicU64::new(1),
        }
    }

    /// Count one action and return the updated record.
    ///
    /// Returns `None` without touching any record when the actor is exempt.
    /// A missing record is created with `window_start = now`; an expired one
    /// is reset to zero with `window_start = now` before the increment. Both
    /// happen under the pair's lock, so neither a reset nor an increment can
    /// be lost to a concurrent observation of the same pair.
    #[instrument(
        level = "debug",
        skip(self, event, now),
        fields(actor_id = %event.actor_id(), guild_id = %event.guild_id(), kind = %event.kind())
    )]
    pub fn observe(
        &self,
        event: &ActionEvent,
        guild_owner: Option<ActorId>,
        now: Instant,
    ) -> Option<CounterRecord> {
        let actor_id = *event.actor_id();
        let guild_id = *event.guild_id();

        if let Some(exemption) = self.exemptions.check(actor_id, guild_owner) {
            debug!(%exemption, "Exempt actor, not counting");
            return None;
        }

        let mut record = self
            .records
            .entry((actor_id, guild_id))
            .or_insert_with(|| {
                let epoch = self.next_epoch.fetch_add(1, Ordering::Relaxed);
                trace!(epoch, "Opening counter record");
                CounterRecord::new(actor_id, guild_id, now, epoch)
            });

        if record.is_expired(now, self.window) {
            debug!("Window elapsed, resetting counts");
            record.reset(now);
        }

        let count = record.counts.increment(*event.kind());
        debug!(count, "Action counted");

        Some(record.clone())
    }

    /// Remove the record for a pair if it is still the record with `epoch`.
    ///
    /// Exactly one caller can claim a given record; everyone else gets `None`.
    pub fn claim(&self, actor_id: ActorId, guild_id: GuildId, epoch: u64) -> Option<CounterRecord> {
        self.records
            .remove_if(&(actor_id, guild_id), |_, record| record.epoch == epoch)
            .map(|(_, record)| record)
    }

    /// Snapshot of the current record for a pair.
    pub fn get(&self, actor_id: ActorId, guild_id: GuildId) -> Option<CounterRecord> {
        self.records
            .get(&(actor_id, guild_id))
            .map(|record| record.value().clone())
    }

    /// Drop every record whose window has elapsed. Returns how many were dropped.
    ///
    /// An expired record would be hard-reset on its next observation anyway,
    /// so dropping it does not change what gets counted. The exception is a
    /// record with any count at or above `threshold`: a verdict may have been
    /// taken on it and not yet claimed, so it is kept for one more window.
    pub fn sweep(&self, now: Instant, threshold: u32) -> usize {
        let window = self.window;
        let grace = window.saturating_mul(2);
        let mut dropped = 0;
        self.records.retain(|_, record| {
            let keep = if record.has_reached(threshold) {
                !record.is_expired(now, grace)
            } else {
                !record.is_expired(now, window)
            };
            if !keep {
                dropped += 1;
            }
            keep
        });
        dropped
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records are live.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Window length.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Static exemptions consulted on every observation.
    pub fn exemptions(&self) -> &ExemptionSet {
        &self.exemptions
    }
}
