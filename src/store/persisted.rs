//! Persisted Store Module
//!
//! Typed, collection-level access to the storage backend.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{error, info};

use crate::error::Result;
use crate::models::{Book, Review, User};
use crate::store::{seed, Collection, MemoryBackend, StorageBackend};

// == Persisted Store ==
/// Ordered record collections kept as whole JSON arrays in a backend.
#[derive(Debug, Clone)]
pub struct PersistedStore {
    backend: Arc<dyn StorageBackend>,
}

impl PersistedStore {
    // == Constructor ==
    /// Opens the store, seeding every absent collection with default data.
    pub fn open(backend: Arc<dyn StorageBackend>) -> Result<Self> {
        Self::open_at(backend, Utc::now())
    }

    /// Like [`open`](Self::open) with an explicit seed timestamp.
    pub fn open_at(backend: Arc<dyn StorageBackend>, now: DateTime<Utc>) -> Result<Self> {
        let store = Self { backend };
        store.seed_missing(now)?;
        Ok(store)
    }

    /// Seeded store on a fresh [`MemoryBackend`].
    pub fn in_memory() -> Result<Self> {
        Self::open(Arc::new(MemoryBackend::new()))
    }

    /// Exposes the medium, mainly so tests can corrupt it.
    pub fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    // == Read Collection ==
    /// Reads a whole collection.
    ///
    /// An absent, unreadable or malformed document yields an empty list; the
    /// problem is logged and never reaches the caller.
    pub fn read_collection<T: DeserializeOwned>(&self, collection: Collection) -> Vec<T> {
        let key = collection.key();
        let raw = match self.backend.load(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                error!("Error reading from storage key {}: {}", key, e);
                return Vec::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            error!("Error reading from storage key {}: {}", key, e);
            Vec::new()
        })
    }

    // == Write Collection ==
    /// Overwrites a whole collection.
    pub fn write_collection<T: Serialize>(&self, collection: Collection, records: &[T]) -> Result<()> {
        let key = collection.key();
        let raw = serde_json::to_string(records)?;
        self.backend.save(key, &raw)?;
        info!("Storage SAVE: {} ({} items)", key, records.len());
        Ok(())
    }

    /// The book collection, newest first.
    pub fn books(&self) -> Vec<Book> {
        self.read_collection(Collection::Books)
    }

    /// The review collection, newest first.
    pub fn reviews(&self) -> Vec<Review> {
        self.read_collection(Collection::Reviews)
    }

    /// The user collection.
    pub fn users(&self) -> Vec<User> {
        self.read_collection(Collection::Users)
    }

    // == Reset ==
    /// Drops every collection and writes the default dataset again.
    pub fn reset(&self, now: DateTime<Utc>) -> Result<()> {
        for collection in Collection::ALL {
            self.backend.remove(collection.key())?;
        }
        self.seed_missing(now)
    }

    fn seed_missing(&self, now: DateTime<Utc>) -> Result<()> {
        if self.backend.load(Collection::Books.key())?.is_none() {
            self.write_collection(Collection::Books, &seed::default_books(now))?;
        }
        if self.backend.load(Collection::Reviews.key())?.is_none() {
            self.write_collection(Collection::Reviews, &seed::default_reviews(now))?;
        }
        if self.backend.load(Collection::Users.key())?.is_none() {
            self.write_collection(Collection::Users, &seed::default_users())?;
        }
        Ok(())
    }
}
