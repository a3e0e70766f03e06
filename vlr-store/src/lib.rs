// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # VLR Store
//!
//! Local state for the vlr.gg scraper.
//!
//! This crate provides:
//!
//! - **ExpiringCache**: bounded in-memory LRU with per-entry TTL
//! - **CacheAdapter**: the trait the fetch layer talks to
//! - **ClientConfig**: JSON configuration with defaults
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use vlr_store::{CacheAdapter, ExpiringCache};
//!
//! let cache: Arc<dyn CacheAdapter> = Arc::new(ExpiringCache::new(100));
//! cache.set_as("https://www.vlr.gg/team/2", "body".to_string(), None);
//! assert_eq!(
//!     cache.get_as::<String>("https://www.vlr.gg/team/2").as_deref(),
//!     Some("body")
//! );
//! ```

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{
    CacheAdapter, CacheValue, DEFAULT_MAX_SIZE, DEFAULT_TTL, EXPIRY_GRACE, ExpiringCache,
};
pub use config::{CacheConfig, ClientConfig, DEFAULT_USER_AGENT, FetchConfig};
pub use error::StoreError;
