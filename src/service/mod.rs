//! Data Access Service
//!
//! The four request operations (list books, create book, list a book's
//! reviews, create review) composed from the TTL cache, the persisted store,
//! simulated latency and injected faults.
//!
//! Every operation answers with an [`ApiResponse`]. Failures, simulated or
//! real, are returned inside the envelope and never propagate as errors.
//!
//! # Consistency
//! - Mutations of one collection are serialized by a per-collection mutex.
//! - List operations hold the cache write guard from lookup to populate, and
//!   mutations invalidate after their store write, so a listing computed from
//!   pre-mutation data never outlives the mutation in the cache.
//! - Store I/O runs on the blocking pool, so an operation waiting on the disk
//!   yields its worker thread while it keeps holding its locks.

mod books;
mod faults;
mod ids;
pub mod keys;
mod reviews;
mod settings;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

use crate::cache::{CacheStats, TtlCache};
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::error::{Result, ServiceError};
use crate::models::{ApiResponse, Book, Page, ReviewWithRelations};
use crate::store::{FileBackend, PersistedStore};

pub use faults::{AlwaysFail, FailFirst, FaultInjector, NeverFail, RandomFaults};
pub use ids::IdGenerator;
pub use reviews::join_reviews;
pub use settings::{FailureRates, LatencyProfile, ServiceSettings};

// == Cached Payload ==
/// Result shapes that list operations keep in the cache.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedPayload {
    BookPage(Page<Book>),
    Reviews(Vec<ReviewWithRelations>),
}

/// Where a listing was served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Cache,
    Storage,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Cache => write!(f, "cache"),
            Origin::Storage => write!(f, "storage"),
        }
    }
}

#[derive(Debug, Default)]
struct WriteLocks {
    books: Mutex<()>,
    reviews: Mutex<()>,
}

// == Book Review Service ==
/// Data-access entry point shared by every caller.
///
/// Cloning is cheap and clones share cache, store and locks.
#[derive(Debug, Clone)]
pub struct BookReviewService {
    store: PersistedStore,
    cache: Arc<RwLock<TtlCache<CachedPayload>>>,
    faults: Arc<dyn FaultInjector>,
    clock: Arc<dyn Clock>,
    ids: Arc<IdGenerator>,
    locks: Arc<WriteLocks>,
    settings: ServiceSettings,
}

impl BookReviewService {
    // == Constructor ==
    /// Creates a service with random fault injection on the system clock.
    pub fn new(store: PersistedStore, settings: ServiceSettings) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        Self {
            cache: Arc::new(RwLock::new(TtlCache::with_clock(
                settings.cache_ttl,
                clock.clone(),
            ))),
            store,
            faults: Arc::new(RandomFaults),
            clock,
            ids: Arc::new(IdGenerator::new()),
            locks: Arc::new(WriteLocks::default()),
            settings,
        }
    }

    /// Creates a service over the file-backed store in `config.data_dir`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let backend = FileBackend::open(&config.data_dir)?;
        let store = PersistedStore::open(Arc::new(backend))?;
        Ok(Self::new(store, config.service_settings()))
    }

    /// Replaces the fault injector.
    pub fn with_faults(mut self, faults: impl FaultInjector + 'static) -> Self {
        self.faults = Arc::new(faults);
        self
    }

    /// Replaces the clock. The cache is rebuilt on the new clock.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.cache = Arc::new(RwLock::new(TtlCache::with_clock(
            self.settings.cache_ttl,
            clock.clone(),
        )));
        self.clock = clock;
        self
    }

    /// The persisted store behind the cache.
    pub fn store(&self) -> &PersistedStore {
        &self.store
    }

    /// Latency, failure rates and cache TTL in effect.
    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }

    /// Snapshot of cache counters.
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    /// Whether `key` currently holds a live cache entry.
    pub async fn is_cached(&self, key: &str) -> bool {
        self.cache.read().await.contains(key)
    }

    // == Reset Data ==
    /// Drops all collections, reseeds defaults and clears the cache.
    pub async fn reset(&self) -> ApiResponse<String> {
        let _books = self.locks.books.lock().await;
        let _reviews = self.locks.reviews.lock().await;

        let now = self.clock.now();
        match self.with_store(move |store| store.reset(now)).await {
            Ok(()) => {
                self.cache.write().await.clear();
                info!("All data cleared and reset");
                ApiResponse::ok(
                    "All data cleared and reset".to_string(),
                    "Storage and cache cleared successfully",
                )
            }
            Err(e) => {
                warn!("Error resetting data: {}", e);
                ApiResponse::failure(String::new(), "Failed to clear data")
            }
        }
    }

    // == Shared Steps ==
    async fn simulate_latency(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn inject_fault(&self, rate: f64) -> Result<()> {
        if self.faults.should_fail(rate) {
            Err(ServiceError::SimulatedFailure)
        } else {
            Ok(())
        }
    }

    /// Runs blocking store work on the blocking thread pool.
    async fn with_store<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&PersistedStore) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || op(&store)).await?
    }

    fn next_id(&self) -> String {
        self.ids.next_id(self.clock.now_ms())
    }
}
