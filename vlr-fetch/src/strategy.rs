//! Extraction traits.
//!
//! An extractor turns one parsed HTML document into a typed value. There is
//! one implementation per page family; the pipeline takes care of fetching,
//! caching and metrics around it.

use scraper::Html;
use vlr_core::ExtractionError;

// ============================================================================
// Extractor
// ============================================================================

/// Extracts a single value from a page.
///
/// ## Implementing an Extractor
///
/// ```ignore
/// struct TitleExtractor;
///
/// impl Extractor for TitleExtractor {
///     type Output = String;
///
///     fn name(&self) -> &str {
///         "title"
///     }
///
///     fn extract(&self, document: &Html) -> Result<String, ExtractionError> {
///         let selector = Selector::parse("title").unwrap();
///         document
///             .select(&selector)
///             .next()
///             .map(|el| el.text().collect())
///             .ok_or_else(|| ExtractionError::missing("title"))
///     }
/// }
/// ```
pub trait Extractor: Send + Sync {
    /// Extracted value. Cached values are cloned out of the cache.
    type Output: Clone + Send + Sync + 'static;

    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Inspects the page before extraction and optionally produces a final
    /// value instead. A short-circuited value counts as a success but is
    /// never cached.
    fn short_circuit(&self, _document: &Html) -> Option<Self::Output> {
        None
    }

    /// Extracts the value.
    fn extract(&self, document: &Html) -> Result<Self::Output, ExtractionError>;
}

/// Result of running an [`Extractor`] over a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted<T> {
    /// Regular extraction; eligible for caching.
    Value(T),
    /// Produced by [`Extractor::short_circuit`]; not cached.
    ShortCircuit(T),
}

/// Parses `body` and runs `extractor` over it.
///
/// The parsed document is not `Send`, so it lives only inside this
/// synchronous call.
pub fn run_extractor<E: Extractor + ?Sized>(
    extractor: &E,
    body: &str,
) -> Result<Extracted<E::Output>, ExtractionError> {
    let document = Html::parse_document(body);
    if let Some(value) = extractor.short_circuit(&document) {
        return Ok(Extracted::ShortCircuit(value));
    }
    extractor.extract(&document).map(Extracted::Value)
}

// ============================================================================
// Page Extractor
// ============================================================================

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Whether the source reports a further page.
    pub has_next: bool,
}

impl<T> Page<T> {
    /// Creates a page.
    pub fn new(items: Vec<T>, has_next: bool) -> Self {
        Self { items, has_next }
    }

    /// A final page.
    pub fn last(items: Vec<T>) -> Self {
        Self::new(items, false)
    }
}

/// Extracts the items of one page of a paginated listing.
pub trait PageExtractor: Send + Sync {
    /// Item type.
    type Item: Clone + Send + Sync + 'static;

    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Extracts the items and the next-page flag.
    fn extract_page(&self, document: &Html) -> Result<Page<Self::Item>, ExtractionError>;
}

/// Parses `body` and runs `extractor` over it.
pub fn run_page_extractor<E: PageExtractor + ?Sized>(
    extractor: &E,
    body: &str,
) -> Result<Page<E::Item>, ExtractionError> {
    let document = Html::parse_document(body);
    extractor.extract_page(&document)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    struct HeadingExtractor;

    impl Extractor for HeadingExtractor {
        type Output = Option<String>;

        fn name(&self) -> &str {
            "heading"
        }

        fn short_circuit(&self, document: &Html) -> Option<Self::Output> {
            let selector = Selector::parse(".draft").ok()?;
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
                .map(|el| Some(el.text().collect::<String>()))
                .ok_or_else(|| ExtractionError::missing("h1"))
        }
    }

    #[test]
    fn test_run_extractor_value() {
        let result = run_extractor(&HeadingExtractor, "<h1>Hello</h1>").unwrap();
        assert_eq!(result, Extracted::Value(Some("Hello".to_string())));
    }

    #[test]
    fn test_run_extractor_short_circuit() {
        let result = run_extractor(&HeadingExtractor, "<div class='draft'></div>").unwrap();
        assert_eq!(result, Extracted::ShortCircuit(None));
    }

    #[test]
    fn test_run_extractor_error() {
        let err = run_extractor(&HeadingExtractor, "<p>no heading</p>").unwrap_err();
        assert!(matches!(err, ExtractionError::MissingElement(_)));
    }

    #[test]
    fn test_page_constructors() {
        let page = Page::last(vec![1, 2]);
        assert!(!page.has_next);
        assert_eq!(page.items.len(), 2);
    }
}
