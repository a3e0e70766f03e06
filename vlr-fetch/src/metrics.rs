//! Cumulative call metrics.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use vlr_core::MetricsReport;

#[derive(Debug, Default)]
struct Counters {
    calls: u64,
    successes: u64,
    elapsed: Duration,
}

/// Thread-safe accumulator of retrieval outcomes.
///
/// One instance is shared (behind an `Arc`) by every retrieval of a client,
/// so a report reflects all calls made through it.
#[derive(Debug, Default)]
pub struct Metrics {
    counters: Mutex<Counters>,
}

impl Metrics {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Counters> {
        self.counters.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records a successful call.
    pub fn track_success(&self, elapsed: Duration) {
        let mut counters = self.lock();
        counters.calls += 1;
        counters.successes += 1;
        counters.elapsed += elapsed;
    }

    /// Records a failed call.
    pub fn track_failure(&self, elapsed: Duration) {
        let mut counters = self.lock();
        counters.calls += 1;
        counters.elapsed += elapsed;
    }

    /// Snapshot of the counters.
    #[allow(clippy::cast_precision_loss)]
    pub fn report(&self) -> MetricsReport {
        let counters = self.lock();
        let success_rate = if counters.calls == 0 {
            1.0
        } else {
            counters.successes as f64 / counters.calls as f64
        };
        MetricsReport {
            call_count: counters.calls,
            elapsed_ms: counters.elapsed.as_secs_f64() * 1000.0,
            success_rate,
        }
    }

    /// Zeroes every counter.
    pub fn reset(&self) {
        *self.lock() = Counters::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let report = Metrics::new().report();
        assert_eq!(report.call_count, 0);
        assert!((report.success_rate - 1.0).abs() < f64::EPSILON);
        assert!(report.elapsed_ms.abs() < f64::EPSILON);
    }

    #[test]
    fn test_success_rate() {
        let metrics = Metrics::new();
        metrics.track_success(Duration::from_millis(10));
        metrics.track_success(Duration::from_millis(10));
        metrics.track_success(Duration::from_millis(10));
        metrics.track_failure(Duration::from_millis(20));

        let report = metrics.report();
        assert_eq!(report.call_count, 4);
        assert!((report.success_rate - 0.75).abs() < 1e-9);
        assert!((report.elapsed_ms - 50.0).abs() < 1e-6);
    }

    #[test]
    fn test_reset() {
        let metrics = Metrics::new();
        metrics.track_failure(Duration::from_millis(5));
        metrics.reset();

        let report = metrics.report();
        assert_eq!(report.call_count, 0);
        assert!((report.success_rate - 1.0).abs() < f64::EPSILON);
    }
}
