//! Simulated processing delay
//!
//! The delay exists purely to make the asynchronous nature of agent work
//! perceptible; it carries no correctness requirement beyond being bounded.
//! It is injectable so tests can substitute zero.

use rand::Rng;
use std::time::Duration;

/// An injectable randomized delay: `base` plus a uniform jitter in
/// `[0, jitter)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingDelay {
    base: Duration,
    jitter: Duration,
}

impl ProcessingDelay {
    /// Explicit base and jitter
    pub const fn new(base: Duration, jitter: Duration) -> Self {
        Self { base, jitter }
    }

    /// A deterministic delay with no jitter
    pub const fn fixed(base: Duration) -> Self {
        Self::new(base, Duration::ZERO)
    }

    /// No delay at all (tests)
    pub const fn none() -> Self {
        Self::fixed(Duration::ZERO)
    }

    /// Draw one delay duration
    pub fn sample(&self) -> Duration {
        // saturate rather than truncate: a u128 millisecond count past
        // u64::MAX must not wrap into a small jitter bound
        let jitter_ms = u64::try_from(self.jitter.as_millis()).unwrap_or(u64::MAX);
        if jitter_ms == 0 {
            return self.base;
        }
        self.base + Duration::from_millis(rand::thread_rng().gen_range(0..jitter_ms))
    }
}

impl Default for ProcessingDelay {
    /// The production feel: 2000ms base plus up to 1000ms of jitter
    fn default() -> Self {
        Self::new(Duration::from_millis(2000), Duration::from_millis(1000))
    }
}
