//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use book_reviews::{
    api::create_router,
    service::{AlwaysFail, NeverFail, ServiceSettings},
    store::PersistedStore,
    AppState, BookReviewService,
};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_service() -> BookReviewService {
    BookReviewService::new(PersistedStore::in_memory().unwrap(), ServiceSettings::instant())
        .with_faults(NeverFail)
}

fn create_test_app() -> Router {
    create_router(AppState::new(create_service()))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// == GET /books ==

#[tokio::test]
async fn test_list_books_default_page() {
    let response = create_test_app().oneshot(get("/books")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["data"].as_array().unwrap().len(), 3);
    assert_eq!(json["data"]["pagination"]["page"], 1);
    assert_eq!(json["data"]["pagination"]["limit"], 10);
    assert_eq!(json["data"]["pagination"]["totalPages"], 1);
}

#[tokio::test]
async fn test_list_books_with_query() {
    let response = create_test_app()
        .oneshot(get("/books?page=2&limit=2"))
        .await
        .unwrap();

    let json = body_to_json(response.into_body()).await;
    let books = json["data"]["data"].as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["title"], "1984");
    assert_eq!(json["data"]["pagination"]["total"], 3);
    assert_eq!(json["data"]["pagination"]["totalPages"], 2);
}

#[tokio::test]
async fn test_list_books_invalid_query() {
    let response = create_test_app()
        .oneshot(get("/books?page=abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_books_simulated_failure() {
    let app = create_router(AppState::new(create_service().with_faults(AlwaysFail)));

    let response = app.oneshot(get("/books")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("Simulated"));
    assert_eq!(json["data"]["data"].as_array().unwrap().len(), 0);
    assert_eq!(json["data"]["pagination"]["total"], 0);
}

// == POST /books ==

#[tokio::test]
async fn test_create_book_then_list() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/books",
            r#"{"title":"X","author":"Y","publishedYear":2001}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_to_json(response.into_body()).await;
    assert_eq!(created["data"]["title"], "X");
    assert_eq!(created["data"]["publishedYear"], 2001);
    assert_eq!(created["data"]["createdAt"], created["data"]["updatedAt"]);

    let listed = body_to_json(app.oneshot(get("/books")).await.unwrap().into_body()).await;
    assert_eq!(listed["data"]["data"][0]["id"], created["data"]["id"]);
    assert_eq!(listed["data"]["pagination"]["total"], 4);
}

#[tokio::test]
async fn test_create_book_invalid_json() {
    let response = create_test_app()
        .oneshot(post_json("/books", "not valid json"))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

// == Reviews ==

#[tokio::test]
async fn test_list_reviews_joined() {
    let response = create_test_app()
        .oneshot(get("/books/1/reviews"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    let reviews = json["data"].as_array().unwrap();
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0]["bookId"], "1");
    assert_eq!(reviews[0]["book"]["title"], "The Great Gatsby");
    assert_eq!(reviews[0]["user"]["name"], "Alice Johnson");
}

#[tokio::test]
async fn test_create_review_then_list() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/books/2/reviews",
            r#"{"title":"T","content":"C","rating":5,"userId":"2"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_to_json(response.into_body()).await;
    assert_eq!(created["data"]["bookId"], "2");
    assert_eq!(created["data"]["book"]["title"], "To Kill a Mockingbird");
    assert_eq!(created["data"]["user"]["name"], "Bob Smith");

    let listed = body_to_json(
        app.oneshot(get("/books/2/reviews"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
    assert_eq!(listed["data"][0]["id"], created["data"]["id"]);
}

#[tokio::test]
async fn test_create_review_accepts_fractional_rating() {
    let response = create_test_app()
        .oneshot(post_json(
            "/books/1/reviews",
            r#"{"title":"T","content":"C","rating":4.5,"userId":"1"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_to_json(response.into_body()).await;
    assert_eq!(created["data"]["rating"], 4.5);
}

// == Operational endpoints ==

#[tokio::test]
async fn test_stats_endpoint() {
    let app = create_test_app();

    app.clone().oneshot(get("/books")).await.unwrap();
    app.clone().oneshot(get("/books")).await.unwrap();

    let response = app.oneshot(get("/stats")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["total_entries"], 1);
    assert_eq!(json["hit_rate"], 0.5);
}

#[tokio::test]
async fn test_reset_endpoint() {
    let app = create_test_app();

    app.clone()
        .oneshot(post_json("/books", r#"{"title":"X","author":"Y"}"#))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/reset")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let listed = body_to_json(app.oneshot(get("/books")).await.unwrap().into_body()).await;
    assert_eq!(listed["data"]["pagination"]["total"], 3);
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = create_test_app().oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}

// == Over a real socket ==

#[tokio::test]
async fn test_served_over_tcp() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_test_app();
    let server = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = reqwest::Client::new();
    let created: Value = client
        .post(format!("http://{}/books/3/reviews", addr))
        .json(&serde_json::json!({
            "title": "Chilling",
            "content": "Still relevant.",
            "rating": 5,
            "userId": "1"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created["success"], true);

    let listed: Value = client
        .get(format!("http://{}/books/3/reviews", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed["data"][0]["title"], "Chilling");
    assert_eq!(listed["data"][0]["book"]["title"], "1984");

    server.abort();
}
