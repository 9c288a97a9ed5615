//! Test doubles.

use crate::Clock;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Manually driven clock.
///
/// Clones share the same time value, so a clone handed to the guard can be
/// advanced from the test body.
///
/// ```
/// use rampart_guard::Clock;
/// use rampart_guard::mocks::MockClock;
/// use std::time::Duration;
///
/// let clock = MockClock::default();
/// let start = clock.now();
/// clock.advance(Duration::from_secs(11));
/// assert_eq!(clock.now(), start + Duration::from_secs(11));
/// ```
#[derive(Debug, Clone)]
pub struct MockClock {
    current_time: Arc<Mutex<Instant>>,
}

impl MockClock {
    /// Create a mock clock starting at a specific instant.
    pub fn new(start: Instant) -> Self {
        Self {
            current_time: Arc::new(Mutex::new(start)),
        }
    }

    /// Advance the clock by a duration.
    pub fn advance(&self, duration: Duration) {
        *self.current_time.lock() += duration;
    }

    /// Set the clock to a specific instant.
    pub fn set(&self, instant: Instant) {
        *self.current_time.lock() = instant;
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl Clock for MockClock {
    fn now(&self) -> Instant {
        *self.current_time.lock()
    }
}
