//! API Handlers
//!
//! HTTP request handlers mapping each route onto a service operation.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::models::{
    ApiResponse, Book, HealthResponse, ListBooksQuery, NewBook, NewReview, Page,
    ReviewWithRelations, StatsResponse,
};
use crate::service::BookReviewService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Data-access service (cheap to clone, shared internals)
    pub service: BookReviewService,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(service: BookReviewService) -> Self {
        Self { service }
    }
}

/// Successful creates answer 201, failures keep the envelope's own status.
fn created<T: Serialize>(resp: ApiResponse<T>) -> Response {
    if resp.success {
        (StatusCode::CREATED, Json(resp)).into_response()
    } else {
        resp.into_response()
    }
}

/// Handler for GET /books?page&limit
pub async fn list_books_handler(
    State(state): State<AppState>,
    Query(query): Query<ListBooksQuery>,
) -> ApiResponse<Page<Book>> {
    state.service.list_books(query.page(), query.limit()).await
}

/// Handler for POST /books
pub async fn create_book_handler(
    State(state): State<AppState>,
    Json(new_book): Json<NewBook>,
) -> Response {
    created(state.service.create_book(new_book).await)
}

/// Handler for GET /books/:id/reviews
pub async fn list_reviews_handler(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> ApiResponse<Vec<ReviewWithRelations>> {
    state.service.list_book_reviews(&book_id).await
}

/// Handler for POST /books/:id/reviews
pub async fn create_review_handler(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    Json(new_review): Json<NewReview>,
) -> Response {
    created(state.service.create_review(&book_id, new_review).await)
}

/// Handler for POST /reset
pub async fn reset_handler(State(state): State<AppState>) -> ApiResponse<String> {
    state.service.reset().await
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.service.cache_stats().await.into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
