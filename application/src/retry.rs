//! Bounded retry with exponential backoff.
//!
//! A small reusable wrapper shared by the analysis use case (and any
//! future batch caller): retry an async operation up to a fixed number of
//! attempts, sleeping between attempts with exponential backoff capped at
//! a maximum delay. A predicate decides which errors are worth retrying;
//! non-retryable errors surface immediately.

use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Attempt budget and backoff schedule for one retried operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first (minimum 1)
    pub max_attempts: u32,
    /// Delay before the second attempt
    pub base_delay: Duration,
    /// Upper bound on any single delay
    pub max_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
            max_delay,
        }
    }

    /// Delay to sleep after a given failed attempt (1-based), doubling
    /// each time and capped at `max_delay`.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exp = attempt.saturating_sub(1).min(u32::BITS - 1);
        let factor = 1u64 << exp;
        let delay = self.base_delay.saturating_mul(factor as u32);
        delay.min(self.max_delay)
    }
}

impl Default for RetryPolicy {
    /// The analysis pipeline default: 3 attempts, 2s base, 10s cap
    fn default() -> Self {
        Self::new(3, Duration::from_secs(2), Duration::from_secs(10))
    }
}

/// Run `operation` with bounded retry.
///
/// `is_retryable` is consulted on each failure; a `false` answer (or an
/// exhausted budget) returns the last error. Successful attempts return
/// immediately — a previous attempt's failure leaves no trace in the
/// result.
pub async fn retry_with_backoff<T, E, F, Fut, P>(
    policy: RetryPolicy,
    is_retryable: P,
    mut operation: F,
) -> Result<T, E>
where
    E: std::fmt::Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: Fn(&E) -> bool,
{
    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    debug!(attempt, "Operation succeeded after retry");
                }
                return Ok(value);
            }
            Err(e) if attempt < policy.max_attempts && is_retryable(&e) => {
                let delay = policy.delay_after(attempt);
                warn!(
                    attempt,
                    max_attempts = policy.max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "Attempt failed, backing off before retry"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
