//! Search results extractor (`/search/?q=...&type=...`).

use scraper::Html;
use tracing::{debug, trace};
use vlr_core::{ExtractionError, SearchKind, SearchResult};
use vlr_fetch::Extractor;

use crate::html::{attr, attr_at, select_all, text_at};
use crate::urls::normalize;

/// Extracts the hits of a search results page.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchExtractor;

impl Extractor for SearchExtractor {
    type Output = Vec<SearchResult>;

    fn name(&self) -> &str {
        "search"
    }

    fn extract(&self, document: &Html) -> Result<Vec<SearchResult>, ExtractionError> {
        let mut results = Vec::new();

        for item in select_all(document, "a.wf-module-item.search-item")? {
            let href = attr(item, "href").unwrap_or_default();
            let parts: Vec<&str> = href.split('/').filter(|p| !p.is_empty()).collect();
            let [kind, id, ..] = parts.as_slice() else {
                continue;
            };
            let Some(kind) = SearchKind::from_path_segment(kind) else {
                trace!(href = %href, "Skipping result of unknown kind");
                continue;
            };

            let image = normalize(&attr_at(item, "img", "src")?.unwrap_or_default());
            let description = text_at(item, ".search-item-desc")?;

            results.push(SearchResult {
                id: (*id).to_string(),
                url: normalize(&href),
                name: text_at(item, ".search-item-title")?,
                image_url: Some(image).filter(|i| !i.is_empty()),
                description: Some(description).filter(|d| !d.is_empty()),
                kind,
            });
        }

        debug!(count = results.len(), "Extracted search results");
        Ok(results)
    }
}
