//! Book Reviews - data-access layer for a book review browser
//!
//! Lists and creates books and reviews over a local key-value store, with a
//! TTL cache in front of it and simulated latency and failures.

pub mod api;
pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use error::{Result, ServiceError};
pub use service::BookReviewService;
