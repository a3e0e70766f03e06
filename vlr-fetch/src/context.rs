//! Retrieval context: fetcher, cache, metrics and settings.
//!
//! The context bundles everything a retrieval needs. Every collaborator is
//! replaceable through [`FetchContextBuilder`], which is how tests inject
//! scripted fetchers.

use std::sync::Arc;
use std::time::Duration;

use vlr_store::{CacheAdapter, ClientConfig, DEFAULT_USER_AGENT, ExpiringCache};

use crate::client::{DEFAULT_TIMEOUT, HttpFetcher, PageFetcher};
use crate::error::FetchError;
use crate::metrics::Metrics;
use crate::retry::{DEFAULT_BASE_DELAY, DEFAULT_RETRIES, RetryStrategy};

/// Default TTL for extracted entities.
pub const DEFAULT_ENTITY_TTL: Duration = Duration::from_secs(300);

/// Default page ceiling for paginated retrievals.
pub const DEFAULT_MAX_PAGES: u32 = 50;

// ============================================================================
// Fetch Settings
// ============================================================================

/// Settings for retrievals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSettings {
    /// Retries after the first attempt.
    pub retries: u32,
    /// Base backoff delay.
    pub retry_delay: Duration,
    /// Per-attempt timeout.
    pub timeout: Duration,
    /// Page ceiling for paginated retrievals.
    pub max_pages: u32,
    /// User agent for the default fetcher.
    pub user_agent: String,
    /// TTL for extracted entities.
    pub entity_ttl: Duration,
    /// TTL for raw page bodies.
    pub page_ttl: Option<Duration>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            retries: DEFAULT_RETRIES,
            retry_delay: DEFAULT_BASE_DELAY,
            timeout: DEFAULT_TIMEOUT,
            max_pages: DEFAULT_MAX_PAGES,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            entity_ttl: DEFAULT_ENTITY_TTL,
            page_ttl: None,
        }
    }
}

impl FetchSettings {
    /// Builds settings from a loaded configuration.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            retries: config.fetch.retries,
            retry_delay: config.fetch.retry_delay(),
            timeout: config.fetch.timeout(),
            max_pages: config.fetch.max_pages,
            user_agent: config.fetch.user_agent.clone(),
            entity_ttl: config.cache.entity_ttl(),
            page_ttl: Some(config.cache.default_ttl()),
        }
    }

    /// Sets the per-attempt timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the retry count.
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Retry strategy derived from these settings.
    pub fn retry_strategy(&self) -> RetryStrategy {
        RetryStrategy::new(self.retries).with_base_delay(self.retry_delay)
    }
}

// ============================================================================
// Fetch Context
// ============================================================================

/// Collaborators shared by every retrieval of one client.
pub struct FetchContext {
    /// Page fetcher.
    pub fetcher: Arc<dyn PageFetcher>,
    /// Cache; `None` disables caching entirely.
    pub cache: Option<Arc<dyn CacheAdapter>>,
    /// Shared metrics accumulator.
    pub metrics: Arc<Metrics>,
    /// Settings.
    pub settings: FetchSettings,
}

impl FetchContext {
    /// Creates a context with the default fetcher and an in-memory cache.
    pub fn new() -> Result<Self, FetchError> {
        Self::builder().build()
    }

    /// Creates a builder for customizing the context.
    pub fn builder() -> FetchContextBuilder {
        FetchContextBuilder::new()
    }

    /// Returns the cache, if enabled.
    pub fn cache(&self) -> Option<&dyn CacheAdapter> {
        self.cache.as_deref()
    }
}

impl std::fmt::Debug for FetchContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchContext")
            .field("cache_enabled", &self.cache.is_some())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Fetch Context Builder
// ============================================================================

/// Builder for constructing a [`FetchContext`].
pub struct FetchContextBuilder {
    fetcher: Option<Arc<dyn PageFetcher>>,
    cache: Option<Arc<dyn CacheAdapter>>,
    cache_enabled: bool,
    max_cache_size: usize,
    metrics: Option<Arc<Metrics>>,
    settings: FetchSettings,
}

impl FetchContextBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            fetcher: None,
            cache: None,
            cache_enabled: true,
            max_cache_size: vlr_store::DEFAULT_MAX_SIZE,
            metrics: None,
            settings: FetchSettings::default(),
        }
    }

    /// Applies a loaded configuration.
    pub fn config(mut self, config: &ClientConfig) -> Self {
        self.settings = FetchSettings::from_config(config);
        self.cache_enabled = config.cache.enabled;
        self.max_cache_size = config.cache.max_size;
        self
    }

    /// Sets the page fetcher.
    pub fn fetcher(mut self, fetcher: Arc<dyn PageFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Sets the cache implementation.
    pub fn cache(mut self, cache: Arc<dyn CacheAdapter>) -> Self {
        self.cache = Some(cache);
        self.cache_enabled = true;
        self
    }

    /// Enables or disables caching.
    pub fn cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    /// Sets the metrics accumulator.
    pub fn metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Sets the settings.
    pub fn settings(mut self, settings: FetchSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the per-attempt timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.settings.timeout = timeout;
        self
    }

    /// Sets the entity TTL.
    pub fn entity_ttl(mut self, ttl: Duration) -> Self {
        self.settings.entity_ttl = ttl;
        self
    }

    /// Sets the TTL for raw page bodies.
    pub fn page_ttl(mut self, ttl: Duration) -> Self {
        self.settings.page_ttl = Some(ttl);
        self
    }

    /// Builds the context. Fails only if the default HTTP client cannot be
    /// constructed.
    pub fn build(self) -> Result<FetchContext, FetchError> {
        let fetcher: Arc<dyn PageFetcher> = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Arc::new(
                HttpFetcher::new(&self.settings.user_agent)?
                    .with_retry_strategy(self.settings.retry_strategy())
                    .with_timeout(self.settings.timeout),
            ),
        };

        let cache = if self.cache_enabled {
            let max_size = self.max_cache_size;
            let default_ttl = self.settings.page_ttl;
            Some(self.cache.unwrap_or_else(|| {
                let cache = match default_ttl {
                    Some(ttl) => ExpiringCache::with_default_ttl(max_size, ttl),
                    None => ExpiringCache::new(max_size),
                };
                Arc::new(cache) as Arc<dyn CacheAdapter>
            }))
        } else {
            None
        };

        Ok(FetchContext {
            fetcher,
            cache,
            metrics: self.metrics.unwrap_or_default(),
            settings: self.settings,
        })
    }
}

impl Default for FetchContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
