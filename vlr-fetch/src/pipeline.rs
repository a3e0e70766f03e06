//! Fetch-cache-extract pipeline.
//!
//! Every retrieval follows the same steps: consult the cache, fetch on a
//! miss, run the extractor, store the result and record metrics. Paginated
//! retrievals repeat the fetch-and-extract step per page and cache the raw
//! page bodies instead of the aggregate.

use std::time::Instant;

use tracing::{debug, error, instrument};
use vlr_core::{CallInfo, Envelope};

use crate::context::FetchContext;
use crate::error::{FetchError, ScrapeError};
use crate::metrics::Metrics;
use crate::strategy::{Extracted, Extractor, Page, PageExtractor, run_extractor, run_page_extractor};

// ============================================================================
// Fetch Pipeline
// ============================================================================

/// Runs extractors against fetched, cached pages.
///
/// Failures are recorded as failed calls and returned unchanged; this layer
/// never retries and never substitutes fallback values.
#[derive(Debug)]
pub struct FetchPipeline {
    ctx: FetchContext,
}

impl FetchPipeline {
    /// Creates a pipeline over `ctx`.
    pub fn new(ctx: FetchContext) -> Self {
        Self { ctx }
    }

    /// Returns the context.
    pub fn context(&self) -> &FetchContext {
        &self.ctx
    }

    /// Returns the shared metrics accumulator.
    pub fn metrics(&self) -> &Metrics {
        &self.ctx.metrics
    }

    /// Removes every cached entry.
    pub fn clear_cache(&self) {
        if let Some(cache) = self.ctx.cache() {
            cache.clear();
            debug!("Cache cleared");
        }
    }

    fn envelope<T>(&self, data: T, from_cache: bool) -> Envelope<T> {
        Envelope::new(
            data,
            CallInfo::from_report(self.ctx.metrics.report(), from_cache),
        )
    }

    /// Retrieves `url` and runs `extractor` over it.
    ///
    /// The URL is the cache key. Extracted values are cached with the entity
    /// TTL; short-circuited values are returned but not cached.
    #[instrument(skip(self, extractor), fields(extractor = extractor.name()))]
    pub async fn retrieve<E>(
        &self,
        url: &str,
        extractor: &E,
        use_cache: bool,
    ) -> Result<Envelope<E::Output>, ScrapeError>
    where
        E: Extractor + ?Sized,
    {
        let start = Instant::now();
        let cache = if use_cache { self.ctx.cache() } else { None };

        if let Some(hit) = cache.and_then(|c| c.get_as::<E::Output>(url)) {
            debug!("Cache hit");
            self.ctx.metrics.track_success(start.elapsed());
            return Ok(self.envelope(hit, true));
        }

        let outcome = match self.ctx.fetcher.fetch(url).await {
            Ok(body) => run_extractor(extractor, &body).map_err(ScrapeError::from),
            Err(err) => Err(ScrapeError::from(err)),
        };

        match outcome {
            Ok(Extracted::Value(value)) => {
                if let Some(cache) = cache {
                    cache.set_as(url, value.clone(), Some(self.ctx.settings.entity_ttl));
                }
                self.ctx.metrics.track_success(start.elapsed());
                debug!(elapsed = ?start.elapsed(), "Retrieved");
                Ok(self.envelope(value, false))
            }
            Ok(Extracted::ShortCircuit(value)) => {
                self.ctx.metrics.track_success(start.elapsed());
                debug!("Extractor short-circuited, result not cached");
                Ok(self.envelope(value, false))
            }
            Err(err) => {
                self.ctx.metrics.track_failure(start.elapsed());
                error!(error = %err, "Retrieval failed");
                Err(err)
            }
        }
    }

    /// Retrieves every page produced by `page_url(1)`, `page_url(2)`, ...
    /// until the extractor reports no further page.
    ///
    /// Raw page bodies are cached under their own URL; the aggregate is not
    /// cached. `from_cache` is true only when every page came from cache.
    /// Fails with [`ScrapeError::PageLimitExceeded`] if the source still
    /// reports a next page after `max_pages` pages.
    #[instrument(skip(self, page_url, extractor), fields(extractor = extractor.name()))]
    pub async fn retrieve_paginated<E, F>(
        &self,
        page_url: F,
        extractor: &E,
        use_cache: bool,
    ) -> Result<Envelope<Vec<E::Item>>, ScrapeError>
    where
        E: PageExtractor + ?Sized,
        F: Fn(u32) -> String + Send + Sync,
    {
        let start = Instant::now();

        match self.collect_pages(&page_url, extractor, use_cache).await {
            Ok((items, all_cached)) => {
                self.ctx.metrics.track_success(start.elapsed());
                debug!(items = items.len(), all_cached, "Pagination complete");
                Ok(self.envelope(items, all_cached))
            }
            Err(err) => {
                self.ctx.metrics.track_failure(start.elapsed());
                error!(error = %err, "Paginated retrieval failed");
                Err(err)
            }
        }
    }

    async fn collect_pages<E, F>(
        &self,
        page_url: &F,
        extractor: &E,
        use_cache: bool,
    ) -> Result<(Vec<E::Item>, bool), ScrapeError>
    where
        E: PageExtractor + ?Sized,
        F: Fn(u32) -> String + Send + Sync,
    {
        let max_pages = self.ctx.settings.max_pages;
        let mut items = Vec::new();
        let mut all_cached = true;

        for page in 1..=max_pages {
            let url = page_url(page);
            let (body, cached) = self.page_body(&url, use_cache).await?;
            all_cached &= cached;

            let Page {
                items: page_items,
                has_next,
            } = run_page_extractor(extractor, &body)?;
            debug!(page, count = page_items.len(), has_next, "Page extracted");
            items.extend(page_items);

            if !has_next {
                return Ok((items, all_cached));
            }
        }

        Err(ScrapeError::PageLimitExceeded {
            url: page_url(1),
            limit: max_pages,
        })
    }

    async fn page_body(&self, url: &str, use_cache: bool) -> Result<(String, bool), FetchError> {
        let cache = if use_cache { self.ctx.cache() } else { None };
        let key = page_key(url);

        if let Some(body) = cache.and_then(|c| c.get_as::<String>(&key)) {
            debug!(url, "Page cache hit");
            return Ok((body, true));
        }

        let body = self.ctx.fetcher.fetch(url).await?;
        if let Some(cache) = cache {
            cache.set_as(&key, body.clone(), self.ctx.settings.page_ttl);
        }
        Ok((body, false))
    }
}

/// Cache key of a raw page body. Kept apart from the URL keys of extracted
/// values so a page and its extraction never evict each other.
fn page_key(url: &str) -> String {
    format!("page:{url}")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::PageFetcher;
    use async_trait::async_trait;
    use scraper::{Html, Selector};
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use vlr_core::ExtractionError;

    /// Serves fixed bodies per URL and counts calls.
    struct MapFetcher {
        pages: HashMap<String, String>,
        calls: AtomicUsize,
    }

    impl MapFetcher {
        fn new(pages: &[(&str, &str)]) -> Arc<Self> {
            Arc::new(Self {
                pages: pages
                    .iter()
                    .map(|(url, body)| ((*url).to_string(), (*body).to_string()))
                    .collect(),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PageFetcher for MapFetcher {
        async fn fetch(&self, url: &str) -> Result<String, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| FetchError::PermanentHttp {
                    url: url.to_string(),
                    status: 404,
                })
        }
    }

    struct TitleExtractor;

    impl Extractor for TitleExtractor {
        type Output = Option<String>;

        fn name(&self) -> &str {
            "title"
        }

        fn short_circuit(&self, document: &Html) -> Option<Self::Output> {
            let selector = Selector::parse(".pending").ok()?;
            document.select(&selector).next().map(|_| None)
        }

        fn extract(&self, document: &Html) -> Result<Self::Output, ExtractionError> {
            let selector = Selector::parse("h1").map_err(|e| ExtractionError::InvalidSelector {
                selector: "h1".into(),
                reason: e.to_string(),
            })?;
            document
                .select(&selector)
                .next()
                .map(|el| Some(el.text().collect()))
                .ok_or_else(|| ExtractionError::missing("h1"))
        }
    }

    struct ListExtractor;

    impl PageExtractor for ListExtractor {
        type Item = String;

        fn name(&self) -> &str {
            "list"
        }

        fn extract_page(&self, document: &Html) -> Result<Page<String>, ExtractionError> {
            let item = Selector::parse("li").map_err(|e| ExtractionError::InvalidSelector {
                selector: "li".into(),
                reason: e.to_string(),
            })?;
            let next = Selector::parse(".next").map_err(|e| ExtractionError::InvalidSelector {
                selector: ".next".into(),
                reason: e.to_string(),
            })?;
            let items = document
                .select(&item)
                .map(|el| el.text().collect())
                .collect();
            let has_next = document.select(&next).next().is_some();
            Ok(Page::new(items, has_next))
        }
    }

    fn pipeline(fetcher: Arc<dyn PageFetcher>) -> FetchPipeline {
        FetchPipeline::new(FetchContext::builder().fetcher(fetcher).build().unwrap())
    }

    #[tokio::test]
    async fn test_second_call_served_from_cache() {
        let fetcher = MapFetcher::new(&[("https://x/1", "<h1>One</h1>")]);
        let pipeline = pipeline(fetcher.clone());

        let first = pipeline.retrieve("https://x/1", &TitleExtractor, true).await.unwrap();
        assert!(!first.from_cache());
        assert_eq!(first.data.as_deref(), Some("One"));
        assert_eq!(fetcher.calls(), 1);

        let second = pipeline.retrieve("https://x/1", &TitleExtractor, true).await.unwrap();
        assert!(second.from_cache());
        assert_eq!(second.data.as_deref(), Some("One"));
        assert_eq!(fetcher.calls(), 1);
        assert_eq!(second.info.call_count, 2);
    }

    #[tokio::test]
    async fn test_cache_bypass_always_fetches() {
        let fetcher = MapFetcher::new(&[("https://x/1", "<h1>One</h1>")]);
        let pipeline = pipeline(fetcher.clone());

        for _ in 0..2 {
            let envelope = pipeline.retrieve("https://x/1", &TitleExtractor, false).await.unwrap();
            assert!(!envelope.from_cache());
        }
        assert_eq!(fetcher.calls(), 2);
    }

    #[tokio::test]
    async fn test_short_circuit_not_cached() {
        let fetcher = MapFetcher::new(&[("https://x/1", "<div class='pending'></div>")]);
        let pipeline = pipeline(fetcher.clone());

        let first = pipeline.retrieve("https://x/1", &TitleExtractor, true).await.unwrap();
        assert!(first.data.is_none());
        let second = pipeline.retrieve("https://x/1", &TitleExtractor, true).await.unwrap();
        assert!(!second.from_cache());
        assert_eq!(fetcher.calls(), 2);
        assert!((second.info.success_rate - 1.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_failures_recorded_and_returned() {
        let fetcher = MapFetcher::new(&[("https://x/bad", "<p>no heading</p>")]);
        let pipeline = pipeline(fetcher);

        let fetch_err = pipeline.retrieve("https://x/missing", &TitleExtractor, true).await;
        assert!(matches!(fetch_err, Err(ScrapeError::Fetch(FetchError::PermanentHttp { .. }))));

        let extract_err = pipeline.retrieve("https://x/bad", &TitleExtractor, true).await;
        assert!(matches!(extract_err, Err(ScrapeError::Extraction(_))));

        let report = pipeline.metrics().report();
        assert_eq!(report.call_count, 2);
        assert!(report.success_rate.abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_pagination_accumulates_pages() {
        let fetcher = MapFetcher::new(&[
            ("https://x/?page=1", "<ul><li>a</li><li>b</li></ul><span class='next'></span>"),
            ("https://x/?page=2", "<ul><li>c</li></ul>"),
        ]);
        let pipeline = pipeline(fetcher.clone());
        let url = |page: u32| format!("https://x/?page={page}");

        let first = pipeline.retrieve_paginated(url, &ListExtractor, true).await.unwrap();
        assert_eq!(first.data, vec!["a", "b", "c"]);
        assert!(!first.from_cache());
        assert_eq!(fetcher.calls(), 2);

        let second = pipeline.retrieve_paginated(url, &ListExtractor, true).await.unwrap();
        assert!(second.from_cache());
        assert_eq!(second.data.len(), 3);
        assert_eq!(fetcher.calls(), 2);
        assert_eq!(second.info.call_count, 2);
    }

    #[tokio::test]
    async fn test_pagination_ceiling() {
        let fetcher = MapFetcher::new(&[
            ("https://x/?page=1", "<li>a</li><span class='next'></span>"),
            ("https://x/?page=2", "<li>b</li><span class='next'></span>"),
        ]);
        let ctx = FetchContext::builder()
            .fetcher(fetcher.clone())
            .settings(crate::context::FetchSettings {
                max_pages: 2,
                ..Default::default()
            })
            .build()
            .unwrap();
        let pipeline = FetchPipeline::new(ctx);

        let err = pipeline
            .retrieve_paginated(|page| format!("https://x/?page={page}"), &ListExtractor, true)
            .await
            .unwrap_err();
        assert!(matches!(err, ScrapeError::PageLimitExceeded { limit: 2, .. }));
        assert_eq!(fetcher.calls(), 2);
        assert!(pipeline.metrics().report().success_rate.abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_page_bodies_and_entities_cached_apart() {
        let fetcher = MapFetcher::new(&[("https://x/?page=1", "<h1>a</h1><li>a</li>")]);
        let pipeline = pipeline(fetcher.clone());
        let url = |page: u32| format!("https://x/?page={page}");

        pipeline.retrieve_paginated(url, &ListExtractor, true).await.unwrap();
        pipeline.retrieve("https://x/?page=1", &TitleExtractor, true).await.unwrap();
        assert_eq!(fetcher.calls(), 2);

        let pages = pipeline.retrieve_paginated(url, &ListExtractor, true).await.unwrap();
        let title = pipeline.retrieve("https://x/?page=1", &TitleExtractor, true).await.unwrap();
        assert!(pages.from_cache());
        assert!(title.from_cache());
        assert_eq!(fetcher.calls(), 2);
    }

    #[tokio::test]
    async fn test_clear_cache_forces_refetch() {
        let fetcher = MapFetcher::new(&[("https://x/1", "<h1>One</h1>")]);
        let pipeline = pipeline(fetcher.clone());

        pipeline.retrieve("https://x/1", &TitleExtractor, true).await.unwrap();
        pipeline.clear_cache();
        let again = pipeline.retrieve("https://x/1", &TitleExtractor, true).await.unwrap();
        assert!(!again.from_cache());
        assert_eq!(fetcher.calls(), 2);
    }
}
