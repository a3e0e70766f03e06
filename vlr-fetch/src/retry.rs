//! Retry policy for page requests.

use std::time::Duration;

/// Default number of retries after the first attempt.
pub const DEFAULT_RETRIES: u32 = 2;

/// Default base delay before the first retry.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(500);

/// Strategy for retrying failed requests.
///
/// Retries are sequential; the delay before retry `n` (1-indexed) is
/// `base_delay * 2^(n-1)`, capped at `max_delay`.
#[derive(Debug, Clone)]
pub struct RetryStrategy {
    /// Retries after the first attempt.
    pub retries: u32,
    /// Delay before the first retry.
    pub base_delay: Duration,
    /// Upper bound for a single delay.
    pub max_delay: Duration,
}

impl RetryStrategy {
    /// Creates a strategy with `retries` retries and the default base delay.
    pub fn new(retries: u32) -> Self {
        Self {
            retries,
            base_delay: DEFAULT_BASE_DELAY,
            max_delay: Duration::from_secs(60),
        }
    }

    /// Disables retries.
    pub fn no_retry() -> Self {
        Self::new(0).with_base_delay(Duration::ZERO)
    }

    /// Sets the base delay.
    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    /// Sets the delay cap.
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Total attempts including the first one.
    pub fn max_attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }

    /// Delay before retry number `retry` (1-indexed).
    pub fn delay_for_retry(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry.saturating_sub(1));
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }

    /// Whether a response status is worth another attempt.
    pub fn should_retry_status(status: u16) -> bool {
        status == 429 || status >= 500
    }
}

impl Default for RetryStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_RETRIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_backoff() {
        let strategy = RetryStrategy::default();

        assert_eq!(strategy.delay_for_retry(1), Duration::from_millis(500));
        assert_eq!(strategy.delay_for_retry(2), Duration::from_millis(1000));
        assert_eq!(strategy.delay_for_retry(3), Duration::from_millis(2000));
        assert_eq!(strategy.delay_for_retry(4), Duration::from_millis(4000));
    }

    #[test]
    fn test_max_delay_cap() {
        let strategy = RetryStrategy::new(10).with_base_delay(Duration::from_secs(10));

        assert_eq!(strategy.delay_for_retry(5), Duration::from_secs(60));
        assert_eq!(strategy.delay_for_retry(40), Duration::from_secs(60));
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(RetryStrategy::should_retry_status(429));
        assert!(RetryStrategy::should_retry_status(500));
        assert!(RetryStrategy::should_retry_status(503));
        assert!(!RetryStrategy::should_retry_status(404));
        assert!(!RetryStrategy::should_retry_status(400));
    }

    #[test]
    fn test_attempt_count() {
        assert_eq!(RetryStrategy::default().max_attempts(), 3);
        assert_eq!(RetryStrategy::no_retry().max_attempts(), 1);
    }
}
