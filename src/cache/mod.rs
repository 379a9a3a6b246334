//! Cache Module
//!
//! Provides the in-memory TTL cache that sits in front of the persisted store.

mod entry;
mod stats;
mod ttl;


use std::time::Duration;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use ttl::TtlCache;

// == Public Constants ==
/// TTL used when none is given (5 minutes)
pub const DEFAULT_TTL: Duration = Duration::from_millis(300_000);
