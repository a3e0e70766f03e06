//! Client configuration.
//!
//! A JSON file with a `cache` and a `fetch` section. Every field has a
//! default, so partial files (or no file at all) are valid.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cache::{DEFAULT_MAX_SIZE, DEFAULT_TTL};
use crate::error::StoreError;

/// Default TTL for extracted entities, in seconds.
pub const DEFAULT_ENTITY_TTL_SECS: u64 = 300;

/// Default user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("vlr-scraper/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Sections
// ============================================================================

/// Cache settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Whether retrievals consult and populate the cache.
    pub enabled: bool,
    /// Maximum number of cached entries.
    pub max_size: usize,
    /// TTL for raw page bodies and `set` calls without a TTL.
    pub default_ttl_secs: u64,
    /// TTL for extracted entities.
    pub entity_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_size: DEFAULT_MAX_SIZE,
            default_ttl_secs: DEFAULT_TTL.as_secs(),
            entity_ttl_secs: DEFAULT_ENTITY_TTL_SECS,
        }
    }
}

impl CacheConfig {
    /// Default TTL as a duration.
    pub fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl_secs)
    }

    /// Entity TTL as a duration.
    pub fn entity_ttl(&self) -> Duration {
        Duration::from_secs(self.entity_ttl_secs)
    }
}

/// Network settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Retries after the first attempt.
    pub retries: u32,
    /// Base backoff delay in milliseconds, doubled on every retry.
    pub retry_delay_ms: u64,
    /// Per-attempt timeout in milliseconds.
    pub timeout_ms: u64,
    /// Upper bound on pages followed by paginated retrievals.
    pub max_pages: u32,
    /// User agent header.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            retries: 2,
            retry_delay_ms: 500,
            timeout_ms: 10_000,
            max_pages: 50,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FetchConfig {
    /// Base retry delay as a duration.
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

// ============================================================================
// Client Config
// ============================================================================

/// Complete client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Cache settings.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Network settings.
    #[serde(default)]
    pub fetch: FetchConfig,
    /// Log filter used by the CLI when neither `--verbose` nor `RUST_LOG` is set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            cache: CacheConfig::default(),
            fetch: FetchConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl ClientConfig {
    /// Returns the default configuration file path.
    ///
    /// - Linux: `~/.config/vlr/config.json`
    /// - macOS: `~/Library/Application Support/vlr/config.json`
    /// - Windows: `%APPDATA%\vlr\config.json`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vlr")
            .join("config.json")
    }

    /// Loads configuration from the default path.
    pub fn load() -> Result<Self, StoreError> {
        Self::load_from(&Self::default_path())
    }

    /// Loads configuration from a specific path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = serde_json::from_str(&content)?;
        config.validate()?;

        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Saves configuration to the default path.
    pub fn save(&self) -> Result<(), StoreError> {
        self.save_to(&Self::default_path())
    }

    /// Saves configuration to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        info!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Rejects values that would make the client unusable.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.cache.max_size == 0 {
            return Err(StoreError::Config("cache.max_size must be at least 1".into()));
        }
        if self.fetch.timeout_ms == 0 {
            return Err(StoreError::Config("fetch.timeout_ms must be positive".into()));
        }
        if self.fetch.max_pages == 0 {
            return Err(StoreError::Config("fetch.max_pages must be at least 1".into()));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert!(config.cache.enabled);
        assert_eq!(config.cache.max_size, 5000);
        assert_eq!(config.cache.entity_ttl(), Duration::from_secs(300));
        assert_eq!(config.cache.default_ttl(), Duration::from_secs(86_400));
        assert_eq!(config.fetch.retries, 2);
        assert_eq!(config.fetch.retry_delay(), Duration::from_millis(500));
        assert_eq!(config.fetch.timeout(), Duration::from_secs(10));
        assert_eq!(config.fetch.max_pages, 50);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");
        let config = ClientConfig::load_from(&path).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");

        let mut config = ClientConfig::default();
        config.cache.enabled = false;
        config.fetch.retries = 5;
        config.fetch.user_agent = "test-agent".into();
        config.save_to(&path).unwrap();

        let loaded = ClientConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"fetch": {"timeout_ms": 2500}}"#).unwrap();

        let loaded = ClientConfig::load_from(&path).unwrap();
        assert_eq!(loaded.fetch.timeout_ms, 2500);
        assert_eq!(loaded.fetch.retries, 2);
        assert_eq!(loaded.cache, CacheConfig::default());
    }

    #[test]
    fn test_invalid_json_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = ClientConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }

    #[test]
    fn test_zero_max_pages_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"fetch": {"max_pages": 0}}"#).unwrap();

        let err = ClientConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));
    }

    #[test]
    fn test_default_path_ends_with_config_json() {
        let path = ClientConfig::default_path();
        assert!(path.ends_with("vlr/config.json"));
    }
}
