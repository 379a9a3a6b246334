//! Cache Entry Module
//!
//! Defines a single cached payload together with its expiry instant.

use std::time::Duration;

// == Cache Entry ==
/// A cached value with creation and expiry timestamps (Unix milliseconds).
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    /// The cached payload
    pub value: V,
    /// Creation timestamp
    pub created_at: i64,
    /// Expiration timestamp
    pub expires_at: i64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry that expires `ttl` after `now_ms`.
    pub fn new(value: V, now_ms: i64, ttl: Duration) -> Self {
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        Self {
            value,
            created_at: now_ms,
            expires_at: now_ms.saturating_add(ttl_ms),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry is expired at `now_ms`.
    ///
    /// An entry is expired once the current time reaches the expiry instant,
    /// so an entry is visible only while `now < expires_at`.
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at
    }

    // == Time To Live ==
    /// Remaining lifetime in milliseconds, `0` once expired.
    pub fn ttl_remaining_ms(&self, now_ms: i64) -> u64 {
        u64::try_from(self.expires_at.saturating_sub(now_ms)).unwrap_or(0)
    }
}
