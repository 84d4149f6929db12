//! Cosmetic "processing" delay wrapped around the pure demo functions.
//!
//! The delay has no ordering semantics; a zero delay calls straight through.

use std::time::Duration;

#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedLatency {
    delay: Duration,
}

impl SimulatedLatency {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Waits out the configured delay, then evaluates `f`.
    pub async fn run<F, T>(&self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        f()
    }
}
