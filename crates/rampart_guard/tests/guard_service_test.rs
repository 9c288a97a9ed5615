//! Tests for the channel-driven guard service.

mod test_utils;

use rampart_core::ActionKind;
use rampart_guard::mocks::MockClock;
use rampart_guard::{AntiNuke, GuardService};
use std::sync::Arc;
use std::time::Duration;
use test_utils::{ATTACKER, GUILD, MockPlatform, OWNER, event, test_config};

#[tokio::test]
async fn test_service_contains_burst_and_drains_on_shutdown() {
    let platform = Arc::new(MockPlatform::new(Some(OWNER)));
    platform.set_latency(Duration::from_millis(5));
    let guard = Arc::new(AntiNuke::new(&test_config(), Arc::clone(&platform)));

    let (service, handle) = GuardService::new(Arc::clone(&guard), Duration::from_secs(60), 16);
    let running = tokio::spawn(service.run());

    for _ in 0..5 {
        assert!(handle.submit(event(ATTACKER, ActionKind::Ban)).await);
    }
    handle.shutdown().await;
    running.await.unwrap();

    assert_eq!(platform.revocations(), 1);
    assert_eq!(guard.metrics().verdicts(), 1);
    assert!(guard.tracker().get(ATTACKER, GUILD).is_none());
    assert!(handle.is_closed());
}

#[tokio::test]
async fn test_submit_after_shutdown_is_rejected() {
    let platform = Arc::new(MockPlatform::new(Some(OWNER)));
    let guard = Arc::new(AntiNuke::new(&test_config(), platform));

    let (service, handle) = GuardService::new(guard, Duration::from_secs(60), 4);
    let running = tokio::spawn(service.run());

    handle.shutdown().await;
    running.await.unwrap();

    assert!(!handle.submit(event(ATTACKER, ActionKind::Kick)).await);
}

#[tokio::test]
async fn test_dropping_every_handle_stops_service() {
    let platform = Arc::new(MockPlatform::new(Some(OWNER)));
    let guard = Arc::new(AntiNuke::new(&test_config(), platform));

    let (service, handle) = GuardService::new(guard, Duration::from_secs(60), 4);
    let running = tokio::spawn(service.run());

    drop(handle);
    tokio::time::timeout(Duration::from_secs(5), running)
        .await
        .expect("service did not stop")
        .unwrap();
}

#[tokio::test]
async fn test_requested_sweep_drops_idle_records() {
    let platform = Arc::new(MockPlatform::new(Some(OWNER)));
    let clock = MockClock::default();
    let guard = Arc::new(AntiNuke::with_clock(&test_config(), platform, clock.clone()));

    guard.handle(&event(ATTACKER, ActionKind::Kick)).await;
    assert!(guard.tracker().get(ATTACKER, GUILD).is_some());
    clock.advance(Duration::from_secs(11));

    let (service, handle) = GuardService::new(Arc::clone(&guard), Duration::from_secs(3600), 4);
    let running = tokio::spawn(service.run());

    assert!(handle.sweep().await);
    handle.shutdown().await;
    running.await.unwrap();

    assert_eq!(guard.metrics().records_swept(), 1);
    assert!(guard.tracker().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_sweep_interval_drops_idle_records() {
    let platform = Arc::new(MockPlatform::new(Some(OWNER)));
    let clock = MockClock::default();
    let guard = Arc::new(AntiNuke::with_clock(&test_config(), platform, clock.clone()));

    guard.handle(&event(ATTACKER, ActionKind::Kick)).await;
    clock.advance(Duration::from_secs(11));

    let (service, handle) = GuardService::new(Arc::clone(&guard), Duration::from_secs(60), 4);
    let running = tokio::spawn(service.run());

    // Not yet due.
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(guard.metrics().records_swept(), 0);

    tokio::time::sleep(Duration::from_secs(31)).await;
    assert_eq!(guard.metrics().records_swept(), 1);
    assert!(guard.tracker().is_empty());

    handle.shutdown().await;
    running.await.unwrap();
}
