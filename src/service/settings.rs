//! Timing and failure knobs of the service

use std::time::Duration;

use crate::cache::DEFAULT_TTL;

/// Fixed delay slept before each operation does any work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    /// Delay of `list_books`
    pub list_books: Duration,
    /// Delay of `create_book`
    pub create_book: Duration,
    /// Delay of `list_book_reviews`
    pub list_reviews: Duration,
    /// Delay of `create_review`
    pub create_review: Duration,
}

impl LatencyProfile {
    /// No delay anywhere.
    pub fn none() -> Self {
        Self {
            list_books: Duration::ZERO,
            create_book: Duration::ZERO,
            list_reviews: Duration::ZERO,
            create_review: Duration::ZERO,
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            list_books: Duration::from_millis(300),
            create_book: Duration::from_millis(400),
            list_reviews: Duration::from_millis(250),
            create_review: Duration::from_millis(400),
        }
    }
}

/// Probability in `[0, 1]` that an operation fails on purpose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FailureRates {
    pub list_books: f64,
    pub create_book: f64,
    pub list_reviews: f64,
    pub create_review: f64,
}

impl FailureRates {
    /// Operations never fail on purpose.
    pub fn none() -> Self {
        Self {
            list_books: 0.0,
            create_book: 0.0,
            list_reviews: 0.0,
            create_review: 0.0,
        }
    }
}

impl Default for FailureRates {
    fn default() -> Self {
        Self {
            list_books: 0.05,
            create_book: 0.03,
            list_reviews: 0.05,
            create_review: 0.03,
        }
    }
}

/// Everything that tunes a [`BookReviewService`](super::BookReviewService).
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceSettings {
    /// Lifetime of cached listings
    pub cache_ttl: Duration,
    /// Simulated per-operation delays
    pub latency: LatencyProfile,
    /// Per-operation injected failure probabilities
    pub failure_rates: FailureRates,
}

impl ServiceSettings {
    /// Default rates and TTL without any simulated latency.
    pub fn instant() -> Self {
        Self {
            latency: LatencyProfile::none(),
            ..Self::default()
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_TTL,
            latency: LatencyProfile::default(),
            failure_rates: FailureRates::default(),
        }
    }
}
