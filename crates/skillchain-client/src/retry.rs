//! Backoff schedule for endpoint failover.
//!
//! Per endpoint, attempt `i` (from 0) that fails transiently waits
//! `min(max_delay, base_delay * 2^min(i, 4)) + jitter` before the next
//! attempt, with `jitter` uniform in `[0, max_jitter]`. An endpoint is
//! abandoned after `max_consecutive_failures` failures in a row, and never
//! gets more than `max_attempts_per_endpoint` attempts.

use std::time::Duration;

use rand::Rng;

/// Largest exponent applied to the base delay.
const MAX_BACKOFF_EXPONENT: u32 = 4;

/// Retry and failover constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub max_jitter: Duration,
    pub max_consecutive_failures: u32,
    pub max_attempts_per_endpoint: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            base_delay: Duration::from_secs(10),
            max_delay: Duration::from_secs(180),
            max_jitter: Duration::from_secs(5),
            max_consecutive_failures: 2,
            max_attempts_per_endpoint: 20,
        }
    }
}

impl RetryPolicy {
    /// Same attempt limits, no waiting.
    pub fn immediate() -> Self {
        Self {
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            max_jitter: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Deterministic part of the wait after failed attempt `attempt`.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 1u32 << attempt.min(MAX_BACKOFF_EXPONENT);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }

    /// Full wait after failed attempt `attempt`, jitter included.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let backoff = self.backoff(attempt);
        if self.max_jitter.is_zero() {
            return backoff;
        }
        let jitter = rand::thread_rng().gen_range(0.0..=self.max_jitter.as_secs_f64());
        backoff + Duration::from_secs_f64(jitter)
    }
}
