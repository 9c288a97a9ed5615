//! The full detection pipeline for one event.

use crate::{
    Clock, ContainmentExecutor, DecisionEngine, GuardConfig, GuardMetrics, GuildPlatform,
    IncidentReport, SystemClock, WindowTracker,
};
use rampart_core::ActionEvent;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Anti-nuke guard: tracker, decision engine and containment executor wired
/// together behind one entry point.
///
/// # Example
///
/// ```no_run
/// # use rampart_guard::{AntiNuke, GuardConfig, GuildPlatform};
/// # use rampart_core::ActionEvent;
/// # use std::sync::Arc;
/// # async fn example<P: GuildPlatform>(platform: Arc<P>, event: ActionEvent) {
/// let guard = AntiNuke::new(&GuardConfig::default(), platform);
/// if let Some(report) = guard.handle(&event).await {
///     println!("contained {}: {}", report.actor_id(), report.outcome());
/// }
/// # }
/// ```
#[derive(Debug)]
pub struct AntiNuke<P, C = SystemClock> {
    platform: Arc<P>,
    tracker: Arc<WindowTracker>,
    engine: DecisionEngine,
    executor: ContainmentExecutor<P>,
    metrics: GuardMetrics,
    clock: C,
}

impl<P: GuildPlatform> AntiNuke<P, SystemClock> {
    /// Create a guard on the system clock.
    pub fn new(config: &GuardConfig, platform: Arc<P>) -> Self {
        Self::with_clock(config, platform, SystemClock::new())
    }
}

impl<P: GuildPlatform, C: Clock> AntiNuke<P, C> {
    /// Create a guard with an explicit time source.
    pub fn with_clock(config: &GuardConfig, platform: Arc<P>, clock: C) -> Self {
        let metrics = GuardMetrics::new();
        let tracker = Arc::new(WindowTracker::new(
            config.exemptions(),
            config.time_window(),
        ));
        let executor =
            ContainmentExecutor::new(Arc::clone(&platform), Arc::clone(&tracker), metrics.clone());

        Self {
            platform,
            tracker,
            engine: DecisionEngine::new(*config.action_threshold()),
            executor,
            metrics,
            clock,
        }
    }

    /// Count one event and contain its actor if the threshold is reached.
    ///
    /// Returns the report when this call ran the containment.
    #[instrument(
        skip(self, event),
        fields(actor_id = %event.actor_id(), guild_id = %event.guild_id(), kind = %event.kind())
    )]
    pub async fn handle(&self, event: &ActionEvent) -> Option<IncidentReport> {
        let owner = self.platform.guild_owner(*event.guild_id()).await;
        let now = self.clock.now();

        let Some(record) = self.tracker.observe(event, owner, now) else {
            self.metrics.record_exempt();
            return None;
        };
        self.metrics.record_event();

        let verdict = self.engine.decide(Some(&record), *event.kind());
        if !verdict.is_contain() {
            debug!(count = record.count(*event.kind()), "Below threshold");
            return None;
        }
        self.metrics.record_verdict();

        self.executor.contain(verdict).await
    }

    /// Drop counter records whose window has elapsed.
    #[instrument(skip(self))]
    pub fn sweep(&self) -> usize {
        let dropped = self.tracker.sweep(self.clock.now(), self.engine.threshold());
        if dropped > 0 {
            debug!(dropped, remaining = self.tracker.len(), "Swept stale records");
            self.metrics.record_swept(dropped);
        }
        dropped
    }

    /// Underlying tracker.
    pub fn tracker(&self) -> &WindowTracker {
        &self.tracker
    }

    /// Shared metrics.
    pub fn metrics(&self) -> &GuardMetrics {
        &self.metrics
    }

    /// Threshold in effect.
    pub fn threshold(&self) -> u32 {
        self.engine.threshold()
    }
}
