//! Store Module
//!
//! Durable, collection-oriented persistence for books, reviews and users.
//!
//! # Layout
//! Each collection is one JSON array stored under a fixed key:
//! - `bookReviewApp_books`
//! - `bookReviewApp_reviews`
//! - `bookReviewApp_users`

mod backend;
mod persisted;
pub mod seed;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use persisted::PersistedStore;

/// A named collection of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Books,
    Reviews,
    Users,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Books, Collection::Reviews, Collection::Users];

    /// Storage key of the collection.
    pub fn key(self) -> &'static str {
        match self {
            Collection::Books => "bookReviewApp_books",
            Collection::Reviews => "bookReviewApp_reviews",
            Collection::Users => "bookReviewApp_users",
        }
    }
}
