//! Book operations: `GET /books` and `POST /books`

use tracing::warn;

use super::{keys, BookReviewService, CachedPayload, Origin};
use crate::error::Result;
use crate::models::{ApiResponse, Book, NewBook, Page};
use crate::store::Collection;

impl BookReviewService {
    // == List Books ==
    /// Returns one page of the book listing, newest first.
    ///
    /// `page` and `limit` below 1 are treated as 1.
    pub async fn list_books(&self, page: usize, limit: usize) -> ApiResponse<Page<Book>> {
        let page = page.max(1);
        let limit = limit.max(1);

        self.simulate_latency(self.settings.latency.list_books).await;

        match self.fetch_book_page(page, limit).await {
            Ok((result, origin)) => {
                ApiResponse::ok(result, format!("Books retrieved from {}", origin))
            }
            Err(e) => {
                warn!("Error fetching books: {}", e);
                ApiResponse::failure(Page::empty(page, limit), e.to_string())
            }
        }
    }

    async fn fetch_book_page(&self, page: usize, limit: usize) -> Result<(Page<Book>, Origin)> {
        let key = keys::books_page(page, limit);
        let mut cache = self.cache.write().await;

        if let Some(CachedPayload::BookPage(cached)) = cache.get(&key) {
            return Ok((cached, Origin::Cache));
        }

        self.inject_fault(self.settings.failure_rates.list_books)?;

        let books = self.with_store(|store| Ok(store.books())).await?;
        let result = Page::slice(&books, page, limit);

        cache.set(
            key,
            CachedPayload::BookPage(result.clone()),
            Some(self.settings.cache_ttl),
        );
        Ok((result, Origin::Storage))
    }

    // == Create Book ==
    /// Stores a new book at the front of the collection.
    ///
    /// Clears the whole cache afterwards: cached listings are keyed by every
    /// `(page, limit)` ever requested and cannot be enumerated.
    pub async fn create_book(&self, new_book: NewBook) -> ApiResponse<Book> {
        self.simulate_latency(self.settings.latency.create_book).await;

        match self.insert_book(new_book).await {
            Ok(book) => ApiResponse::ok(book, "Book added successfully"),
            Err(e) => {
                warn!("Error adding book: {}", e);
                ApiResponse::failure(Book::default(), e.to_string())
            }
        }
    }

    async fn insert_book(&self, new_book: NewBook) -> Result<Book> {
        self.inject_fault(self.settings.failure_rates.create_book)?;

        let book = new_book.into_book(self.next_id(), self.clock.now());
        {
            let _guard = self.locks.books.lock().await;
            let created = book.clone();
            self.with_store(move |store| {
                let mut books = store.books();
                books.insert(0, created);
                store.write_collection(Collection::Books, &books)
            })
            .await?;
        }

        self.cache.write().await.clear();
        Ok(book)
    }
}
