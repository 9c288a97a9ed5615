//! Counters for guard activity.

use rampart_core::IncidentOutcome;
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics collector for the guard pipeline.
///
/// Clones share the same counters.
#[derive(Debug, Clone)]
pub struct GuardMetrics {
    inner: Arc<GuardMetricsInner>,
}

#[derive(Debug, Default)]
struct GuardMetricsInner {
    // Detection
    events_observed: AtomicU64,
    exempt_skipped: AtomicU64,
    verdicts: AtomicU64,
    duplicates_suppressed: AtomicU64,
    records_swept: AtomicU64,

    // Containment outcomes
    contained: AtomicU64,
    forbidden: AtomicU64,
    errored: AtomicU64,
    owner_unreachable: AtomicU64,
}

impl Default for GuardMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl GuardMetrics {
    /// Creates a new metrics collector.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(GuardMetricsInner::default()),
        }
    }

    /// Records an event that reached the tracker.
    pub fn record_event(&self) {
        self.inner.events_observed.fetch_add(1, Ordering::Relaxed);
    }

    /// Records an event skipped because its actor was exempt.
    pub fn record_exempt(&self) {
        self.inner.exempt_skipped.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a `contain` verdict.
    pub fn record_verdict(&self) {
        self.inner.verdicts.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a verdict whose record had already been claimed.
    pub fn record_duplicate(&self) {
        self.inner
            .duplicates_suppressed
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Records stale records dropped by a sweep.
    pub fn record_swept(&self, count: usize) {
        self.inner
            .records_swept
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Records a finished containment.
    pub fn record_outcome(&self, outcome: &IncidentOutcome) {
        let counter = match outcome {
            IncidentOutcome::Succeeded => &self.inner.contained,
            IncidentOutcome::Forbidden => &self.inner.forbidden,
            IncidentOutcome::Errored(_) => &self.inner.errored,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Records an incident with no responsible party to notify.
    pub fn record_owner_unreachable(&self) {
        self.inner.owner_unreachable.fetch_add(1, Ordering::Relaxed);
    }

    /// Gets the number of counted events.
    pub fn events_observed(&self) -> u64 {
        self.inner.events_observed.load(Ordering::Relaxed)
    }

    /// Gets the number of exempt events.
    pub fn exempt_skipped(&self) -> u64 {
        self.inner.exempt_skipped.load(Ordering::Relaxed)
    }

    /// Gets the number of `contain` verdicts.
    pub fn verdicts(&self) -> u64 {
        self.inner.verdicts.load(Ordering::Relaxed)
    }

    /// Gets the number of suppressed duplicate triggers.
    pub fn duplicates_suppressed(&self) -> u64 {
        self.inner.duplicates_suppressed.load(Ordering::Relaxed)
    }

    /// Gets the number of swept records.
    pub fn records_swept(&self) -> u64 {
        self.inner.records_swept.load(Ordering::Relaxed)
    }

    /// Gets the number of containments that fully succeeded.
    pub fn contained(&self) -> u64 {
        self.inner.contained.load(Ordering::Relaxed)
    }

    /// Gets the number of containments refused for lack of privilege.
    pub fn forbidden(&self) -> u64 {
        self.inner.forbidden.load(Ordering::Relaxed)
    }

    /// Gets the number of containments interrupted by platform errors.
    pub fn errored(&self) -> u64 {
        self.inner.errored.load(Ordering::Relaxed)
    }

    /// Gets the number of incidents without a reachable owner.
    pub fn owner_unreachable(&self) -> u64 {
        self.inner.owner_unreachable.load(Ordering::Relaxed)
    }

    /// Creates a serializable snapshot of current metrics.
    pub fn snapshot(&self) -> GuardMetricsSnapshot {
        GuardMetricsSnapshot {
            events_observed: self.events_observed(),
            exempt_skipped: self.exempt_skipped(),
            verdicts: self.verdicts(),
            duplicates_suppressed: self.duplicates_suppressed(),
            records_swept: self.records_swept(),
            incidents: IncidentCounts {
                contained: self.contained(),
                forbidden: self.forbidden(),
                errored: self.errored(),
                owner_unreachable: self.owner_unreachable(),
            },
        }
    }
}

/// Serializable snapshot of guard metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuardMetricsSnapshot {
    /// Events counted by the tracker
    pub events_observed: u64,
    /// Events from exempt actors
    pub exempt_skipped: u64,
    /// `contain` verdicts produced
    pub verdicts: u64,
    /// Verdicts dropped because containment already ran
    pub duplicates_suppressed: u64,
    /// Stale records dropped by sweeps
    pub records_swept: u64,
    /// Containment results
    pub incidents: IncidentCounts,
}

/// Containment results by outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncidentCounts {
    /// Fully succeeded
    pub contained: u64,
    /// Refused for lack of privilege
    pub forbidden: u64,
    /// Interrupted by a platform error
    pub errored: u64,
    /// No owner could be notified
    pub owner_unreachable: u64,
}
