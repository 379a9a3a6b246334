//! Request DTOs for the HTTP surface
//!
//! Create-request bodies live next to their records ([`NewBook`](super::NewBook),
//! [`NewReview`](super::NewReview)); this module holds query strings.

use serde::Deserialize;

/// Default page when the query omits it
pub const DEFAULT_PAGE: usize = 1;
/// Default page size when the query omits it
pub const DEFAULT_LIMIT: usize = 10;

/// Query string of `GET /books`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListBooksQuery {
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl ListBooksQuery {
    pub fn page(&self) -> usize {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}
