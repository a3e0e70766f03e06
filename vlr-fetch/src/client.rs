//! Resilient page fetcher.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use crate::error::{FetchError, TransportError};
use crate::retry::RetryStrategy;
use crate::transport::{ReqwestTransport, Transport};

/// Default per-attempt timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// Page Fetcher Trait
// ============================================================================

/// Fetches the body of a page.
///
/// This is the seam the retrieval pipeline depends on; the default
/// implementation is [`HttpFetcher`].
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Returns the body of `url`.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

// ============================================================================
// HTTP Fetcher
// ============================================================================

/// Page fetcher with per-attempt timeout and exponential backoff.
///
/// Each attempt is raced against the timeout; on expiry the request future
/// is dropped, which cancels it. 429, 5xx, network errors and timeouts are
/// retried. Any other non-success status is returned immediately.
#[derive(Clone)]
pub struct HttpFetcher {
    transport: Arc<dyn Transport>,
    retry: RetryStrategy,
    timeout: Duration,
}

impl HttpFetcher {
    /// Creates a fetcher over the reqwest transport.
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        Ok(Self::with_transport(Arc::new(ReqwestTransport::new(
            user_agent,
        )?)))
    }

    /// Creates a fetcher over a custom transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            retry: RetryStrategy::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the retry strategy.
    pub fn with_retry_strategy(mut self, strategy: RetryStrategy) -> Self {
        self.retry = strategy;
        self
    }

    /// Sets the per-attempt timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the retry strategy.
    pub fn retry_strategy(&self) -> &RetryStrategy {
        &self.retry
    }

    /// Returns the per-attempt timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn attempt(&self, url: &str) -> Result<String, FetchError> {
        let response = match tokio::time::timeout(self.timeout, self.transport.get(url)).await {
            Err(_) => {
                return Err(FetchError::Timeout {
                    url: url.to_string(),
                    timeout: self.timeout,
                });
            }
            Ok(Err(TransportError::InvalidUrl(reason) | TransportError::DomainNotAllowed(reason))) => {
                return Err(FetchError::InvalidUrl {
                    url: url.to_string(),
                    reason,
                });
            }
            Ok(Err(err)) => {
                return Err(FetchError::Network {
                    url: url.to_string(),
                    message: err.to_string(),
                });
            }
            Ok(Ok(response)) => response,
        };

        if response.is_success() {
            return Ok(response.body);
        }

        let url = url.to_string();
        let status = response.status;
        if RetryStrategy::should_retry_status(status) {
            Err(FetchError::TransientHttp { url, status })
        } else {
            Err(FetchError::PermanentHttp { url, status })
        }
    }
}

impl std::fmt::Debug for HttpFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpFetcher")
            .field("retry", &self.retry)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    #[instrument(skip(self), fields(url = %url))]
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let max_attempts = self.retry.max_attempts();
        let mut attempt = 0;

        loop {
            attempt += 1;
            debug!(attempt, "Fetching page");

            let err = match self.attempt(url).await {
                Ok(body) => return Ok(body),
                Err(err) => err,
            };

            if !err.is_retryable() {
                debug!(error = %err, "Non-retryable failure");
                return Err(err);
            }

            if attempt >= max_attempts {
                warn!(attempts = attempt, error = %err, "Retries exhausted");
                return Err(FetchError::Exhausted {
                    url: url.to_string(),
                    status: err.status(),
                    attempts: attempt,
                    source: Box::new(err),
                });
            }

            let delay = self.retry.delay_for_retry(attempt);
            warn!(
                attempt,
                status = err.status(),
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                error = %err,
                "Request failed, retrying"
            );
            tokio::time::sleep(delay).await;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::RawResponse;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Replays scripted responses; the last one repeats.
    struct ScriptedTransport {
        script: Mutex<Vec<Result<RawResponse, String>>>,
        calls: AtomicUsize,
    }

    impl ScriptedTransport {
        fn new(script: Vec<Result<RawResponse, String>>) -> Arc<Self> {
            Arc::new(Self {
                script: Mutex::new(script),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn get(&self, _url: &str) -> Result<RawResponse, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut script = self.script.lock().unwrap();
            let next = if script.len() > 1 {
                script.remove(0)
            } else {
                script[0].clone()
            };
            next.map_err(TransportError::Other)
        }
    }

    /// Never completes.
    struct HangingTransport {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Transport for HangingTransport {
        async fn get(&self, _url: &str) -> Result<RawResponse, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            std::future::pending().await
        }
    }

    fn fetcher(transport: Arc<dyn Transport>, retries: u32) -> HttpFetcher {
        HttpFetcher::with_transport(transport).with_retry_strategy(
            RetryStrategy::new(retries).with_base_delay(Duration::from_millis(1)),
        )
    }

    #[tokio::test]
    async fn test_success_single_call() {
        let transport = ScriptedTransport::new(vec![Ok(RawResponse::new(200, "X"))]);
        let fetcher = fetcher(transport.clone(), 0);

        let body = fetcher.fetch("https://www.vlr.gg/").await.unwrap();
        assert_eq!(body, "X");
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_persistent_500_exhausts() {
        let transport = ScriptedTransport::new(vec![Ok(RawResponse::new(500, "oops"))]);
        let fetcher = fetcher(transport.clone(), 2);

        let err = fetcher.fetch("https://www.vlr.gg/").await.unwrap_err();
        assert_eq!(transport.calls(), 3);
        match err {
            FetchError::Exhausted {
                status, attempts, ..
            } => {
                assert_eq!(status, Some(500));
                assert_eq!(attempts, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_permanent_status_not_retried() {
        let transport = ScriptedTransport::new(vec![Ok(RawResponse::new(404, "nope"))]);
        let fetcher = fetcher(transport.clone(), 2);

        let err = fetcher.fetch("https://www.vlr.gg/").await.unwrap_err();
        assert_eq!(transport.calls(), 1);
        assert!(matches!(err, FetchError::PermanentHttp { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_recovers_after_transient_failures() {
        let transport = ScriptedTransport::new(vec![
            Ok(RawResponse::new(429, "")),
            Err("connection reset".to_string()),
            Ok(RawResponse::new(200, "ok")),
        ]);
        let fetcher = fetcher(transport.clone(), 2);

        let body = fetcher.fetch("https://www.vlr.gg/").await.unwrap();
        assert_eq!(body, "ok");
        assert_eq!(transport.calls(), 3);
    }

    #[tokio::test]
    async fn test_network_error_exhausts_without_status() {
        let transport = ScriptedTransport::new(vec![Err("dns failure".to_string())]);
        let fetcher = fetcher(transport.clone(), 1);

        let err = fetcher.fetch("https://www.vlr.gg/").await.unwrap_err();
        assert_eq!(transport.calls(), 2);
        assert!(matches!(err, FetchError::Exhausted { status: None, .. }));
    }

    #[tokio::test]
    async fn test_timeout_cancels_and_retries() {
        let transport = Arc::new(HangingTransport {
            calls: AtomicUsize::new(0),
        });
        let fetcher = fetcher(transport.clone(), 1).with_timeout(Duration::from_millis(10));

        let err = fetcher.fetch("https://www.vlr.gg/").await.unwrap_err();
        assert_eq!(transport.calls.load(Ordering::SeqCst), 2);
        match err {
            FetchError::Exhausted { status, source, .. } => {
                assert_eq!(status, None);
                assert!(matches!(*source, FetchError::Timeout { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unfollowed_redirect_is_permanent() {
        let transport = ScriptedTransport::new(vec![Ok(RawResponse::new(302, "moved"))]);
        let fetcher = fetcher(transport.clone(), 2);

        let err = fetcher.fetch("https://www.vlr.gg/").await.unwrap_err();
        assert_eq!(transport.calls(), 1);
        assert!(matches!(err, FetchError::PermanentHttp { status: 302, .. }));
    }
}
