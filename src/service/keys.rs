//! Cache key layout
//!
//! ```text
//! books:{page}:{limit}    → one page of the book listing
//! reviews:book:{bookId}   → joined reviews of one book
//! ```

/// Key of one `(page, limit)` slice of the book listing.
pub fn books_page(page: usize, limit: usize) -> String {
    format!("books:{}:{}", page, limit)
}

/// Key of the joined review list of one book.
pub fn book_reviews(book_id: &str) -> String {
    format!("reviews:book:{}", book_id)
}
