//! Records, request bodies and response envelopes
//!
//! Records serialize in camelCase, matching the persisted JSON layout.

pub mod book;
pub mod envelope;
pub mod requests;
pub mod responses;
pub mod review;
pub mod user;

// Re-export commonly used types
pub use book::{Book, NewBook};
pub use envelope::{ApiResponse, Page, Pagination};
pub use requests::ListBooksQuery;
pub use responses::{HealthResponse, StatsResponse};
pub use review::{NewReview, Review, ReviewWithRelations};
pub use user::User;
