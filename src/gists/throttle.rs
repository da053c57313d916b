//! Fixed delay between remote calls.

use std::time::Duration;

use tracing::debug;

/// Sleeps for a fixed delay to stay under API rate limits.
///
/// A zero delay never sleeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Throttle {
    delay: Duration,
}

impl Throttle {
    /// Create a throttle with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// A throttle that never sleeps.
    pub fn none() -> Self {
        Self::default()
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Block for the configured delay.
    pub fn pause(&self) {
        if self.delay.is_zero() {
            return;
        }
        debug!("Throttling for {}ms", self.delay.as_millis());
        std::thread::sleep(self.delay);
    }
}
