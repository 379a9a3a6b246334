//! Default dataset written into empty collections on first open.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Book, Review, User};

#[allow(clippy::too_many_arguments)]
fn book(
    id: &str,
    title: &str,
    author: &str,
    isbn: &str,
    year: i32,
    genre: &str,
    description: &str,
    cover: &str,
    now: DateTime<Utc>,
) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        isbn: Some(isbn.to_string()),
        published_year: Some(year),
        genre: Some(genre.to_string()),
        description: Some(description.to_string()),
        cover_image: Some(cover.to_string()),
        created_at: now,
        updated_at: now,
    }
}

pub fn default_books(now: DateTime<Utc>) -> Vec<Book> {
    vec![
        book(
            "1",
            "The Great Gatsby",
            "F. Scott Fitzgerald",
            "978-0-7432-7356-5",
            1925,
            "Classic Literature",
            "A classic American novel set in the Jazz Age.",
            "https://images.unsplash.com/photo-1544947950-fa07a98d237f?w=300&h=400&fit=crop",
            now,
        ),
        book(
            "2",
            "To Kill a Mockingbird",
            "Harper Lee",
            "978-0-06-112008-4",
            1960,
            "Classic Literature",
            "A gripping tale of racial injustice and childhood innocence.",
            "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=300&h=400&fit=crop",
            now,
        ),
        book(
            "3",
            "1984",
            "George Orwell",
            "978-0-452-28423-4",
            1949,
            "Dystopian Fiction",
            "A dystopian social science fiction novel and cautionary tale.",
            "https://images.unsplash.com/photo-1495640388908-05fa85288e61?w=300&h=400&fit=crop",
            now,
        ),
    ]
}

/// Two reviews of book "1", one and two days old.
pub fn default_reviews(now: DateTime<Utc>) -> Vec<Review> {
    let day_ago = now - Duration::days(1);
    let two_days_ago = now - Duration::days(2);

    vec![
        Review {
            id: "1".to_string(),
            book_id: "1".to_string(),
            user_id: "1".to_string(),
            rating: 5.0,
            title: "Absolutely brilliant!".to_string(),
            content: "This book is a masterpiece. Fitzgerald's writing is beautiful and the story is captivating.".to_string(),
            created_at: day_ago,
            updated_at: day_ago,
        },
        Review {
            id: "2".to_string(),
            book_id: "1".to_string(),
            user_id: "2".to_string(),
            rating: 4.0,
            title: "Great classic".to_string(),
            content: "A well-written classic that captures the essence of the Jazz Age perfectly.".to_string(),
            created_at: two_days_ago,
            updated_at: two_days_ago,
        },
    ]
}

pub fn default_users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
            avatar: Some("https://images.unsplash.com/photo-1494790108755-2616b612b5bc?w=100&h=100&fit=crop&crop=face".to_string()),
        },
        User {
            id: "2".to_string(),
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
            avatar: Some("https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face".to_string()),
        },
    ]
}
