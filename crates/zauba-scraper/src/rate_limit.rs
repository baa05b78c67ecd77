//! Politeness pause between consecutive detail-page requests.
//!
//! The registry site blocks clients that request pages back to back, so the
//! pipeline waits a random interval drawn uniformly from `[min, max]` before
//! every detail fetch except the first. A zero-width range disables the
//! pause entirely, which is what tests use.

use std::time::Duration;

/// Randomized inter-request delay with inclusive millisecond bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoliteDelay {
    min_ms: u64,
    max_ms: u64,
}

impl PoliteDelay {
    /// Creates a delay drawn from `[min_ms, max_ms]`.
    ///
    /// Bounds given in the wrong order are swapped.
    #[must_use]
    pub fn from_millis(min_ms: u64, max_ms: u64) -> Self {
        Self {
            min_ms: min_ms.min(max_ms),
            max_ms: min_ms.max(max_ms),
        }
    }

    /// A delay that never sleeps.
    #[must_use]
    pub fn disabled() -> Self {
        Self::from_millis(0, 0)
    }

    /// Draws the next pause length.
    #[must_use]
    pub fn sample(&self) -> Duration {
        if self.min_ms == self.max_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(rand::random_range(self.min_ms..=self.max_ms))
    }

    /// Sleeps for a freshly sampled interval and returns how long it waited.
    pub async fn pause(&self) -> Duration {
        let delay = self.sample();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        delay
    }
}

impl Default for PoliteDelay {
    /// Two to four seconds.
    fn default() -> Self {
        Self::from_millis(2_000, 4_000)
    }
}
