//! Cache Statistics Module
//!
//! Tracks cache effectiveness: hits, misses, lazy expirations and invalidations.

use serde::Serialize;

// == Cache Stats ==
/// Counters describing how the cache has been used.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Lookups served from the cache
    pub hits: u64,
    /// Lookups that fell through to the store (absent or expired)
    pub misses: u64,
    /// Entries dropped on lookup because their TTL had elapsed
    pub expirations: u64,
    /// Entries removed by targeted deletes
    pub invalidations: u64,
    /// Number of full clears
    pub clears: u64,
    /// Current number of stored entries, expired ones included until looked up
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// An expired lookup counts both as an expiration and as a miss.
    pub fn record_expiration(&mut self) {
        self.expirations += 1;
        self.misses += 1;
    }

    /// Increments the invalidation counter.
    pub fn record_invalidation(&mut self) {
        self.invalidations += 1;
    }

    /// Increments the clear counter.
    pub fn record_clear(&mut self) {
        self.clears += 1;
    }

    /// Updates the current entry count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
