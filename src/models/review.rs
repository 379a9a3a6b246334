//! Review records and their read-time join with books and users

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Book, User};

/// A persisted review. Never carries joined book/user data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub book_id: String,
    pub user_id: String,
    pub rating: f64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of a create-review request: a review without id, bookId or timestamps.
///
/// Rating range and required fields are not checked here; any JSON number
/// is accepted as a rating.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub user_id: String,
    pub rating: f64,
    pub title: String,
    pub content: String,
}

impl NewReview {
    pub fn into_review(self, id: String, book_id: String, now: DateTime<Utc>) -> Review {
        Review {
            id,
            book_id,
            user_id: self.user_id,
            rating: self.rating,
            title: self.title,
            content: self.content,
            created_at: now,
            updated_at: now,
        }
    }
}

// == Joined Review ==
/// A review decorated with its book and author, as returned to callers.
///
/// Serializes flat: the review's own fields plus optional `book` and `user`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewWithRelations {
    #[serde(flatten)]
    pub review: Review,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book: Option<Book>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl ReviewWithRelations {
    /// Resolves `book` and `user` by id. Missing targets stay `None`.
    pub fn resolve(review: Review, books: &[Book], users: &[User]) -> Self {
        let book = books.iter().find(|b| b.id == review.book_id).cloned();
        let user = users.iter().find(|u| u.id == review.user_id).cloned();
        Self { review, book, user }
    }
}
