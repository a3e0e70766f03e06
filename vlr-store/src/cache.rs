//! In-memory expiring LRU cache.
//!
//! Values are stored type-erased so one cache instance can hold parsed
//! entities of every kind alongside raw page bodies. Reads downcast back to
//! the requested type; a type mismatch reads as a miss.

use std::any::Any;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use lru::LruCache;
use tracing::debug;

// ============================================================================
// Constants
// ============================================================================

/// Default capacity.
pub const DEFAULT_MAX_SIZE: usize = 5000;

/// TTL applied when `set` is called without one.
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Added to every expiry so a read issued right at the TTL boundary still hits.
pub const EXPIRY_GRACE: Duration = Duration::from_millis(5);

/// Type-erased cached value.
pub type CacheValue = Arc<dyn Any + Send + Sync>;

// ============================================================================
// Adapter Trait
// ============================================================================

/// Key-value store with per-entry expiry.
///
/// Implementations must be safe to share between concurrent callers.
pub trait CacheAdapter: Send + Sync {
    /// Returns the live value for `key`, or `None` if unknown or expired.
    fn get(&self, key: &str) -> Option<CacheValue>;

    /// Stores `value` under `key`. `None` uses the adapter's default TTL.
    fn set(&self, key: &str, value: CacheValue, ttl: Option<Duration>);

    /// Removes `key`.
    fn delete(&self, key: &str);

    /// Removes every entry.
    fn clear(&self);
}

impl dyn CacheAdapter + '_ {
    /// Typed read. A value stored under a different type counts as a miss.
    pub fn get_as<T>(&self, key: &str) -> Option<T>
    where
        T: Any + Send + Sync + Clone,
    {
        let value = self.get(key)?;
        match value.downcast::<T>() {
            Ok(typed) => Some(T::clone(&typed)),
            Err(_) => {
                debug!(key, "Cached value has unexpected type");
                None
            }
        }
    }

    /// Typed write.
    pub fn set_as<T>(&self, key: &str, value: T, ttl: Option<Duration>)
    where
        T: Any + Send + Sync,
    {
        self.set(key, Arc::new(value), ttl);
    }
}

// ============================================================================
// Expiring LRU
// ============================================================================

struct Entry {
    value: CacheValue,
    expires_at: Instant,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at > now
    }
}

/// Bounded LRU cache whose entries expire after a TTL.
///
/// Reads move an entry to the most-recently-used position but never extend
/// its expiry. Capacity is only enforced on insert: expired entries are
/// purged first, then the least-recently-used entry is evicted.
pub struct ExpiringCache {
    inner: Mutex<Inner>,
    default_ttl: Duration,
}

struct Inner {
    entries: LruCache<String, Entry>,
    /// Lower bound on the earliest expiry among stored entries. While it
    /// lies in the future nothing can be expired and the sweep is skipped.
    next_expiry: Option<Instant>,
}

impl Inner {
    fn note_expiry(&mut self, expires_at: Instant) {
        self.next_expiry = Some(self.next_expiry.map_or(expires_at, |t| t.min(expires_at)));
    }

    fn purge_expired(&mut self, now: Instant) -> usize {
        if self.next_expiry.is_none_or(|t| t > now) {
            return 0;
        }

        let mut next_expiry = None;
        let mut expired = Vec::new();
        for (key, entry) in &self.entries {
            if entry.is_live(now) {
                next_expiry = Some(next_expiry.map_or(entry.expires_at, |t: Instant| {
                    t.min(entry.expires_at)
                }));
            } else {
                expired.push(key.clone());
            }
        }
        for key in &expired {
            self.entries.pop(key);
        }
        self.next_expiry = next_expiry;
        expired.len()
    }
}

impl ExpiringCache {
    /// Creates a cache holding at most `max_size` entries (minimum 1).
    pub fn new(max_size: usize) -> Self {
        Self::with_default_ttl(max_size, DEFAULT_TTL)
    }

    /// Creates a cache with a custom default TTL.
    pub fn with_default_ttl(max_size: usize, default_ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(max_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(Inner {
                entries: LruCache::new(capacity),
                next_expiry: None,
            }),
            default_ttl,
        }
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.lock().entries.cap().get()
    }

    /// Number of stored entries, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Default TTL of this cache.
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ExpiringCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SIZE)
    }
}

impl std::fmt::Debug for ExpiringCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpiringCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("default_ttl", &self.default_ttl)
            .finish()
    }
}

impl CacheAdapter for ExpiringCache {
    fn get(&self, key: &str) -> Option<CacheValue> {
        let now = Instant::now();
        let mut inner = self.lock();

        match inner.entries.get(key) {
            None => return None,
            Some(entry) if entry.is_live(now) => return Some(Arc::clone(&entry.value)),
            Some(_) => {}
        }

        inner.entries.pop(key);
        debug!(key, "Cache entry expired");
        None
    }

    fn set(&self, key: &str, value: CacheValue, ttl: Option<Duration>) {
        let now = Instant::now();
        let expires_at = now + ttl.unwrap_or(self.default_ttl) + EXPIRY_GRACE;
        let mut inner = self.lock();

        if !inner.entries.contains(key) && inner.entries.len() >= inner.entries.cap().get() {
            let purged = inner.purge_expired(now);
            if purged > 0 {
                debug!(purged, "Purged expired cache entries");
            }
        }

        inner.note_expiry(expires_at);
        let entry = Entry { value, expires_at };
        if let Some((evicted, _)) = inner.entries.push(key.to_string(), entry) {
            if evicted != key {
                debug!(key = %evicted, "Evicted least recently used cache entry");
            }
        }
    }

    fn delete(&self, key: &str) {
        self.lock().entries.pop(key);
    }

    fn clear(&self) {
        let mut inner = self.lock();
        inner.entries.clear();
        inner.next_expiry = None;
    }
}

// ============================================================================
// Tests
// ============================================================================
