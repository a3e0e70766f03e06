//! The `VlrClient` facade.
//!
//! One method per page family, each delegating to a shared
//! [`FetchPipeline`]. All methods of one client share the cache and the
//! metrics accumulator, so the client can be cloned behind an `Arc` and used
//! from concurrent tasks.

use std::sync::Arc;
use std::time::Duration;

use tracing::instrument;
use vlr_core::{
    CompletedMatch, Envelope, IncomingMatch, MetricsReport, Player, SearchCategory, SearchResult,
    Team, TeamMatch, TeamMatchesPage, TeamTransaction,
};
use vlr_fetch::{
    FetchContext, FetchContextBuilder, FetchError, FetchPipeline, FetchSettings, Metrics,
    PageFetcher, ScrapeError,
};
use vlr_store::{CacheAdapter, ClientConfig};

use crate::extractors::{
    CompletedMatchExtractor, IncomingMatchesExtractor, PlayerExtractor, SearchExtractor,
    TeamExtractor, TeamMatchesExtractor, TeamTransactionsExtractor,
};
use crate::urls;

// ============================================================================
// Client
// ============================================================================

/// Scraping client for vlr.gg.
///
/// Every method takes a `use_cache` flag: `false` bypasses the cache for
/// both lookup and store.
pub struct VlrClient {
    pipeline: FetchPipeline,
}

impl VlrClient {
    /// Creates a client with default settings.
    pub fn new() -> Result<Self, FetchError> {
        Self::builder().build()
    }

    /// Creates a client from a loaded configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, FetchError> {
        Self::builder().config(config).build()
    }

    /// Creates a builder for customizing the client.
    pub fn builder() -> VlrClientBuilder {
        VlrClientBuilder::new()
    }

    /// The underlying pipeline.
    pub fn pipeline(&self) -> &FetchPipeline {
        &self.pipeline
    }

    /// Settings in effect.
    pub fn settings(&self) -> &FetchSettings {
        &self.pipeline.context().settings
    }

    // ------------------------------------------------------------------------
    // Entities
    // ------------------------------------------------------------------------

    /// Fetches the profile of team `id`.
    #[instrument(skip(self), fields(svc = "team"))]
    pub async fn get_team(&self, id: &str, use_cache: bool) -> Result<Envelope<Team>, ScrapeError> {
        self.pipeline
            .retrieve(&urls::team(id), &TeamExtractor, use_cache)
            .await
    }

    /// Fetches the profile of player `id`.
    #[instrument(skip(self), fields(svc = "player"))]
    pub async fn get_player(
        &self,
        id: &str,
        use_cache: bool,
    ) -> Result<Envelope<Player>, ScrapeError> {
        self.pipeline
            .retrieve(&urls::player(id), &PlayerExtractor, use_cache)
            .await
    }

    /// Fetches match `id`.
    ///
    /// Returns `None` as data when the match is not finished yet; that
    /// result is not cached.
    #[instrument(skip(self), fields(svc = "completed"))]
    pub async fn get_completed_match(
        &self,
        id: &str,
        use_cache: bool,
    ) -> Result<Envelope<Option<CompletedMatch>>, ScrapeError> {
        self.pipeline
            .retrieve(
                &urls::completed_match(id),
                &CompletedMatchExtractor::new(id),
                use_cache,
            )
            .await
    }

    /// Lists live and upcoming matches.
    #[instrument(skip(self), fields(svc = "incoming"))]
    pub async fn list_incoming_matches(
        &self,
        use_cache: bool,
    ) -> Result<Envelope<Vec<IncomingMatch>>, ScrapeError> {
        self.pipeline
            .retrieve(&urls::incoming_matches(), &IncomingMatchesExtractor, use_cache)
            .await
    }

    /// Fetches the full match history of team `id`, following pagination.
    #[instrument(skip(self), fields(svc = "team_matches"))]
    pub async fn get_team_matches(
        &self,
        id: &str,
        use_cache: bool,
    ) -> Result<Envelope<Vec<TeamMatch>>, ScrapeError> {
        self.pipeline
            .retrieve_paginated(
                |page| urls::team_matches(id, page),
                &TeamMatchesExtractor,
                use_cache,
            )
            .await
    }

    /// Fetches a single page (starting at 1) of team `id`'s match history.
    #[instrument(skip(self), fields(svc = "team_matches"))]
    pub async fn get_team_matches_page(
        &self,
        id: &str,
        page: u32,
        use_cache: bool,
    ) -> Result<Envelope<TeamMatchesPage>, ScrapeError> {
        self.pipeline
            .retrieve(
                &urls::team_matches(id, page.max(1)),
                &TeamMatchesExtractor,
                use_cache,
            )
            .await
    }

    /// Searches for `query` within `category`.
    #[instrument(skip(self), fields(svc = "search"))]
    pub async fn search(
        &self,
        query: &str,
        category: SearchCategory,
        use_cache: bool,
    ) -> Result<Envelope<Vec<SearchResult>>, ScrapeError> {
        self.pipeline
            .retrieve(&urls::search(query, category), &SearchExtractor, use_cache)
            .await
    }

    /// Fetches the roster transactions of team `id`.
    #[instrument(skip(self), fields(svc = "transactions"))]
    pub async fn get_team_transactions(
        &self,
        id: &str,
        use_cache: bool,
    ) -> Result<Envelope<Vec<TeamTransaction>>, ScrapeError> {
        self.pipeline
            .retrieve(&urls::team_transactions(id), &TeamTransactionsExtractor, use_cache)
            .await
    }

    // ------------------------------------------------------------------------
    // Housekeeping
    // ------------------------------------------------------------------------

    /// Snapshot of the cumulative call metrics.
    pub fn metrics(&self) -> MetricsReport {
        self.pipeline.metrics().report()
    }

    /// Zeroes the call metrics.
    pub fn reset_metrics(&self) {
        self.pipeline.metrics().reset();
    }

    /// Removes every cached entry. No-op when caching is disabled.
    pub fn clear_cache(&self) {
        self.pipeline.clear_cache();
    }
}

impl std::fmt::Debug for VlrClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VlrClient")
            .field("context", self.pipeline.context())
            .finish()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`VlrClient`].
///
/// ```ignore
/// let client = VlrClient::builder()
///     .cache_enabled(true)
///     .default_ttl(Duration::from_secs(600))
///     .build()?;
/// ```
pub struct VlrClientBuilder {
    inner: FetchContextBuilder,
}

impl VlrClientBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self {
            inner: FetchContext::builder(),
        }
    }

    /// Applies a loaded configuration. Call before other setters.
    #[must_use]
    pub fn config(mut self, config: &ClientConfig) -> Self {
        self.inner = self.inner.config(config);
        self
    }

    /// Enables or disables the in-memory cache.
    #[must_use]
    pub fn cache_enabled(mut self, enabled: bool) -> Self {
        self.inner = self.inner.cache_enabled(enabled);
        self
    }

    /// Replaces the cache implementation.
    #[must_use]
    pub fn cache(mut self, cache: Arc<dyn CacheAdapter>) -> Self {
        self.inner = self.inner.cache(cache);
        self
    }

    /// Default TTL of the built-in cache, used for raw page bodies.
    #[must_use]
    pub fn default_ttl(mut self, ttl: Duration) -> Self {
        self.inner = self.inner.page_ttl(ttl);
        self
    }

    /// TTL of extracted entities.
    #[must_use]
    pub fn entity_ttl(mut self, ttl: Duration) -> Self {
        self.inner = self.inner.entity_ttl(ttl);
        self
    }

    /// Per-attempt request timeout of the default fetcher.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Replaces the page fetcher.
    #[must_use]
    pub fn fetcher(mut self, fetcher: Arc<dyn PageFetcher>) -> Self {
        self.inner = self.inner.fetcher(fetcher);
        self
    }

    /// Shares an existing metrics accumulator.
    #[must_use]
    pub fn metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.inner = self.inner.metrics(metrics);
        self
    }

    /// Builds the client.
    pub fn build(self) -> Result<VlrClient, FetchError> {
        Ok(VlrClient {
            pipeline: FetchPipeline::new(self.inner.build()?),
        })
    }
}

impl Default for VlrClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
