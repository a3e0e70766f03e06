// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # VLR Fetch
//!
//! Resilient page retrieval for the vlr.gg scraper.
//!
//! ## Fetching
//!
//! - [`transport::Transport`] - One raw GET (reqwest-backed by default)
//! - [`client::HttpFetcher`] - Timeout, retry and backoff over a transport
//! - [`client::PageFetcher`] - The seam the pipeline fetches through
//!
//! ## Pipeline
//!
//! - [`strategy::Extractor`] / [`strategy::PageExtractor`] - Per-page parsers
//! - [`pipeline::FetchPipeline`] - Cache, fetch, extract, record metrics
//! - [`context::FetchContext`] - Fetcher, cache, metrics and settings
//!
//! ## Example
//!
//! ```ignore
//! use vlr_fetch::{FetchContext, FetchPipeline};
//!
//! let pipeline = FetchPipeline::new(FetchContext::new()?);
//! let envelope = pipeline
//!     .retrieve("https://www.vlr.gg/team/2", &TeamExtractor::new("2"), true)
//!     .await?;
//! println!("{} (cached: {})", envelope.data.name, envelope.from_cache());
//! ```

pub mod client;
pub mod context;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod retry;
pub mod strategy;
pub mod transport;

// Errors
pub use error::{FetchError, ScrapeError, TransportError};

// Fetching
pub use client::{DEFAULT_TIMEOUT, HttpFetcher, PageFetcher};
pub use retry::RetryStrategy;
pub use transport::{RawResponse, ReqwestTransport, Transport};

// Pipeline
pub use context::{FetchContext, FetchContextBuilder, FetchSettings};
pub use metrics::Metrics;
pub use pipeline::FetchPipeline;
pub use strategy::{Extracted, Extractor, Page, PageExtractor, run_extractor, run_page_extractor};
