//! Review operations: `GET /books/{id}/reviews` and `POST /books/{id}/reviews`

use tracing::warn;

use super::{keys, BookReviewService, CachedPayload, Origin};
use crate::error::Result;
use crate::models::{ApiResponse, Book, NewReview, Review, ReviewWithRelations, User};
use crate::store::Collection;

/// Reviews of `book_id` with their relations, newest first.
///
/// Reviews with equal `created_at` keep their collection order.
pub fn join_reviews(
    book_id: &str,
    reviews: Vec<Review>,
    books: &[Book],
    users: &[User],
) -> Vec<ReviewWithRelations> {
    let mut joined: Vec<ReviewWithRelations> = reviews
        .into_iter()
        .filter(|review| review.book_id == book_id)
        .map(|review| ReviewWithRelations::resolve(review, books, users))
        .collect();

    // sort_by is stable
    joined.sort_by(|a, b| b.review.created_at.cmp(&a.review.created_at));
    joined
}

impl BookReviewService {
    // == List Book Reviews ==
    /// Returns the reviews of `book_id` with book and author attached, newest
    /// first.
    pub async fn list_book_reviews(&self, book_id: &str) -> ApiResponse<Vec<ReviewWithRelations>> {
        self.simulate_latency(self.settings.latency.list_reviews).await;

        match self.fetch_book_reviews(book_id).await {
            Ok((reviews, origin)) => {
                ApiResponse::ok(reviews, format!("Reviews retrieved from {}", origin))
            }
            Err(e) => {
                warn!("Error fetching reviews for book {}: {}", book_id, e);
                ApiResponse::failure(Vec::new(), e.to_string())
            }
        }
    }

    async fn fetch_book_reviews(
        &self,
        book_id: &str,
    ) -> Result<(Vec<ReviewWithRelations>, Origin)> {
        let key = keys::book_reviews(book_id);
        let mut cache = self.cache.write().await;

        if let Some(CachedPayload::Reviews(cached)) = cache.get(&key) {
            return Ok((cached, Origin::Cache));
        }

        self.inject_fault(self.settings.failure_rates.list_reviews)?;

        let owned_id = book_id.to_string();
        let joined = self
            .with_store(move |store| {
                Ok(join_reviews(
                    &owned_id,
                    store.reviews(),
                    &store.books(),
                    &store.users(),
                ))
            })
            .await?;

        cache.set(
            key,
            CachedPayload::Reviews(joined.clone()),
            Some(self.settings.cache_ttl),
        );
        Ok((joined, Origin::Storage))
    }

    // == Create Review ==
    /// Stores a review of `book_id` and returns it with relations resolved.
    ///
    /// Only the cached review list of that book is invalidated. The book is not
    /// required to exist; an unknown id yields a review without `book`.
    pub async fn create_review(
        &self,
        book_id: &str,
        new_review: NewReview,
    ) -> ApiResponse<ReviewWithRelations> {
        self.simulate_latency(self.settings.latency.create_review).await;

        match self.insert_review(book_id, new_review).await {
            Ok(review) => ApiResponse::ok(review, "Review added successfully"),
            Err(e) => {
                warn!("Error adding review for book {}: {}", book_id, e);
                ApiResponse::failure(ReviewWithRelations::default(), e.to_string())
            }
        }
    }

    async fn insert_review(
        &self,
        book_id: &str,
        new_review: NewReview,
    ) -> Result<ReviewWithRelations> {
        self.inject_fault(self.settings.failure_rates.create_review)?;

        let review = new_review.into_review(self.next_id(), book_id.to_string(), self.clock.now());
        {
            let _guard = self.locks.reviews.lock().await;
            let created = review.clone();
            self.with_store(move |store| {
                let mut reviews = store.reviews();
                reviews.insert(0, created);
                store.write_collection(Collection::Reviews, &reviews)
            })
            .await?;
        }

        self.cache.write().await.delete(&keys::book_reviews(book_id));

        self.with_store(move |store| {
            Ok(ReviewWithRelations::resolve(
                review,
                &store.books(),
                &store.users(),
            ))
        })
        .await
    }
}
