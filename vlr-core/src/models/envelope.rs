//! Retrieval envelope and metrics snapshot types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Metrics Report
// ============================================================================

/// Point-in-time snapshot of the cumulative call metrics of one client.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
    /// Total retrievals recorded (success + failure).
    pub call_count: u64,
    /// Sum of all recorded durations, in milliseconds.
    pub elapsed_ms: f64,
    /// Ratio of successful calls in `0.0..=1.0`; `1.0` when nothing ran yet.
    pub success_rate: f64,
}

impl MetricsReport {
    /// An empty report (no calls yet).
    pub fn empty() -> Self {
        Self {
            call_count: 0,
            elapsed_ms: 0.0,
            success_rate: 1.0,
        }
    }
}

impl Default for MetricsReport {
    fn default() -> Self {
        Self::empty()
    }
}

// ============================================================================
// Call Info
// ============================================================================

/// Execution metadata attached to every retrieval result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallInfo {
    /// Total calls performed by the client's metrics accumulator.
    pub call_count: u64,
    /// Cumulative duration of all calls (ms).
    pub elapsed_ms: f64,
    /// Success ratio in the range 0-1.
    pub success_rate: f64,
    /// True when the data came from the local cache.
    pub from_cache: bool,
}

impl CallInfo {
    /// Builds call info from a metrics snapshot.
    pub fn from_report(report: MetricsReport, from_cache: bool) -> Self {
        Self {
            call_count: report.call_count,
            elapsed_ms: report.elapsed_ms,
            success_rate: report.success_rate,
            from_cache,
        }
    }
}

// ============================================================================
// Envelope
// ============================================================================

/// Wrapper returned by every public client method.
///
/// Surfaces both the extracted data and the runtime metrics, including
/// whether the value was served from cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Extracted result.
    pub data: T,
    /// Execution metadata.
    pub info: CallInfo,
}

impl<T> Envelope<T> {
    /// Creates a new envelope.
    pub fn new(data: T, info: CallInfo) -> Self {
        Self { data, info }
    }

    /// Returns true if the data was served from cache.
    pub fn from_cache(&self) -> bool {
        self.info.from_cache
    }

    /// Maps the payload, keeping the metadata.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            data: f(self.data),
            info: self.info,
        }
    }
}
