//! TTL Cache Module
//!
//! In-memory key/value cache whose entries expire lazily on lookup.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, DEFAULT_TTL};
use crate::clock::{Clock, SystemClock};

// == TTL Cache ==
/// Process-lifetime cache with per-entry time-to-live.
///
/// There is no size bound and no background sweep: an entry whose TTL has
/// elapsed is removed the next time it is looked up.
#[derive(Debug)]
pub struct TtlCache<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Usage counters
    stats: CacheStats,
    /// TTL applied when `set` is called without one
    default_ttl: Duration,
    /// Time source for expiry checks
    clock: Arc<dyn Clock>,
}

impl<V: Clone> TtlCache<V> {
    // == Constructor ==
    /// Creates an empty cache on the system clock.
    pub fn new(default_ttl: Duration) -> Self {
        Self::with_clock(default_ttl, Arc::new(SystemClock))
    }

    /// Creates an empty cache on the given clock.
    pub fn with_clock(default_ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl,
            clock,
        }
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// # Arguments
    /// * `ttl` - Lifetime of the entry (uses the default TTL if None)
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        let key = key.into();
        let ttl = ttl.unwrap_or(self.default_ttl);
        let entry = CacheEntry::new(value, self.clock.now_ms(), ttl);

        debug!("Cache SET: {} (TTL: {}ms)", key, ttl.as_millis());
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns a clone of the cached value if present and not expired.
    ///
    /// Expired entries are removed as a side effect and reported as misses.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now_ms();

        let expired = match self.entries.get(key) {
            None => {
                debug!("Cache MISS: {}", key);
                self.stats.record_miss();
                return None;
            }
            Some(entry) => entry.is_expired_at(now),
        };

        if expired {
            self.entries.remove(key);
            self.stats.set_total_entries(self.entries.len());
            self.stats.record_expiration();
            debug!("Cache EXPIRED: {}", key);
            return None;
        }

        debug!("Cache HIT: {}", key);
        self.stats.record_hit();
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Delete ==
    /// Removes one entry. Returns whether an entry was present.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.stats.record_invalidation();
            self.stats.set_total_entries(self.entries.len());
        }
        debug!("Cache DELETE: {}", key);
        removed
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.record_clear();
        self.stats.set_total_entries(0);
        debug!("Cache CLEARED");
    }

    /// Checks for a live entry without touching stats or evicting.
    pub fn contains(&self, key: &str) -> bool {
        let now = self.clock.now_ms();
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired_at(now))
    }

    // == Stats ==
    /// Returns a snapshot of the usage counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Number of stored entries, including expired ones not yet looked up.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn manual_cache() -> (TtlCache<String>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::starting_now());
        let cache = TtlCache::with_clock(DEFAULT_TTL, clock.clone());
        (cache, clock)
    }

    #[test]
    fn test_cache_new() {
        let cache: TtlCache<String> = TtlCache::default();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_set_and_get() {
        let (mut cache, _) = manual_cache();

        cache.set("key1", "value1".to_string(), None);

        assert_eq!(cache.get("key1").as_deref(), Some("value1"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_get_nonexistent() {
        let (mut cache, _) = manual_cache();
        assert!(cache.get("nonexistent").is_none());
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_cache_overwrite_resets_value_and_ttl() {
        let (mut cache, clock) = manual_cache();

        cache.set("key1", "value1".to_string(), Some(Duration::from_secs(1)));
        clock.advance(Duration::from_millis(800));
        cache.set("key1", "value2".to_string(), Some(Duration::from_secs(1)));
        clock.advance(Duration::from_millis(800));

        assert_eq!(cache.get("key1").as_deref(), Some("value2"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_default_ttl_expiry() {
        let (mut cache, clock) = manual_cache();

        cache.set("key1", "value1".to_string(), None);

        clock.advance(DEFAULT_TTL - Duration::from_millis(1));
        assert!(cache.get("key1").is_some());

        clock.advance(Duration::from_millis(1));
        assert!(cache.get("key1").is_none());
    }

    #[test]
    fn test_expired_entry_is_lazily_purged() {
        let (mut cache, clock) = manual_cache();

        cache.set("key1", "value1".to_string(), Some(Duration::from_secs(1)));
        clock.advance(Duration::from_secs(2));

        // Still stored until somebody looks it up
        assert_eq!(cache.len(), 1);
        assert!(!cache.contains("key1"));

        assert!(cache.get("key1").is_none());
        assert_eq!(cache.len(), 0);

        let stats = cache.stats();
        assert_eq!(stats.expirations, 1);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn test_cache_delete() {
        let (mut cache, _) = manual_cache();

        cache.set("key1", "value1".to_string(), None);
        assert!(cache.delete("key1"));

        assert!(cache.is_empty());
        assert!(cache.get("key1").is_none());
    }

    #[test]
    fn test_cache_delete_nonexistent_is_noop() {
        let (mut cache, _) = manual_cache();
        cache.set("key1", "value1".to_string(), None);

        assert!(!cache.delete("other"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().invalidations, 0);
    }

    #[test]
    fn test_cache_clear() {
        let (mut cache, _) = manual_cache();

        cache.set("books:1:10", "a".to_string(), None);
        cache.set("books:2:10", "b".to_string(), None);
        cache.set("reviews:book:1", "c".to_string(), None);
        cache.clear();

        assert!(cache.is_empty());
        assert!(cache.get("books:1:10").is_none());
        assert_eq!(cache.stats().clears, 1);
    }

    #[test]
    fn test_cache_stats() {
        let (mut cache, _) = manual_cache();

        cache.set("key1", "value1".to_string(), None);
        cache.get("key1"); // hit
        cache.get("nonexistent"); // miss

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }
}
