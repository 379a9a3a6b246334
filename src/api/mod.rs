//! API Module
//!
//! HTTP handlers and routing exposing the data-access operations.
//!
//! # Endpoints
//! - `GET /books?page&limit` - One page of books
//! - `POST /books` - Add a book
//! - `GET /books/:id/reviews` - Reviews of a book with book and user attached
//! - `POST /books/:id/reviews` - Add a review to a book
//! - `POST /reset` - Restore the default dataset and clear the cache
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
