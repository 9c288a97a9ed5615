//! Background task that feeds events into the guard.

use crate::{AntiNuke, Clock, GuildPlatform, IncidentReport};
use rampart_core::ActionEvent;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinSet};
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, error, info, instrument};

/// Message types for the guard service.
#[derive(Debug)]
pub enum GuardMessage {
    /// Count an attributed action
    Event(ActionEvent),
    /// Drop stale counter records now
    Sweep,
    /// Stop accepting work and wait for in-flight events
    Shutdown,
}

/// Sending side of a [`GuardService`].
#[derive(Debug, Clone)]
pub struct GuardHandle {
    tx: mpsc::Sender<GuardMessage>,
}

impl GuardHandle {
    /// Queue an event. Returns `false` if the service has stopped.
    pub async fn submit(&self, event: ActionEvent) -> bool {
        self.tx.send(GuardMessage::Event(event)).await.is_ok()
    }

    /// Request an immediate sweep.
    pub async fn sweep(&self) -> bool {
        self.tx.send(GuardMessage::Sweep).await.is_ok()
    }

    /// Ask the service to stop.
    pub async fn shutdown(&self) {
        if self.tx.send(GuardMessage::Shutdown).await.is_err() {
            debug!("Guard service already stopped");
        }
    }

    /// Whether the service is still receiving.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Runs an [`AntiNuke`] guard as a message-driven task.
///
/// Every event is handled on its own task so a slow containment for one actor
/// never delays counting for others. Stale records are swept on a fixed
/// interval.
pub struct GuardService<P, C> {
    guard: Arc<AntiNuke<P, C>>,
    rx: mpsc::Receiver<GuardMessage>,
    sweep_interval: Duration,
}

impl<P, C> GuardService<P, C>
where
    P: GuildPlatform + 'static,
    C: Clock + 'static,
{
    /// Creates a service and the handle that feeds it.
    pub fn new(
        guard: Arc<AntiNuke<P, C>>,
        sweep_interval: Duration,
        capacity: usize,
    ) -> (Self, GuardHandle) {
        let (tx, rx) = mpsc::channel(capacity);
        let service = Self {
            guard,
            rx,
            sweep_interval,
        };
        (service, GuardHandle { tx })
    }

    /// Runs the service loop until shutdown or until every handle is dropped.
    #[instrument(skip(self), fields(sweep_interval_secs = self.sweep_interval.as_secs()))]
    pub async fn run(mut self) {
        info!("Guard service started");

        let mut sweep = interval(self.sweep_interval);
        sweep.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        sweep.tick().await;

        let mut tasks: JoinSet<Option<IncidentReport>> = JoinSet::new();

        loop {
            tokio::select! {
                msg = self.rx.recv() => match msg {
                    Some(GuardMessage::Event(event)) => {
                        let guard = Arc::clone(&self.guard);
                        tasks.spawn(async move { guard.handle(&event).await });
                    }
                    Some(GuardMessage::Sweep) => {
                        self.guard.sweep();
                    }
                    Some(GuardMessage::Shutdown) => {
                        info!("Guard service shutting down");
                        break;
                    }
                    None => {
                        info!("All guard handles dropped, stopping");
                        break;
                    }
                },
                _ = sweep.tick() => {
                    self.guard.sweep();
                }
                Some(joined) = tasks.join_next(), if !tasks.is_empty() => {
                    log_finished(joined);
                }
            }
        }

        while let Some(joined) = tasks.join_next().await {
            log_finished(joined);
        }

        info!("Guard service stopped");
    }
}

fn log_finished(joined: Result<Option<IncidentReport>, JoinError>) {
    match joined {
        Ok(Some(report)) => debug!(
            incident_id = %report.incident_id(),
            outcome = %report.outcome(),
            "Incident task finished"
        ),
        Ok(None) => {}
        Err(e) => error!(error = %e, "Event task failed"),
    }
}
