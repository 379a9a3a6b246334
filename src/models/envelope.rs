//! Response envelope and pagination types
//!
//! Every service operation answers with an [`ApiResponse`]; failures are
//! values of this type too, never errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

// == Api Response ==
/// Uniform `{success, data, message?, error?}` wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying `data`.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: Some(message.into()),
            error: None,
        }
    }

    /// Failed response; `data` should be the type's empty value.
    pub fn failure(data: T, error: impl Into<String>) -> Self {
        Self {
            success: false,
            data,
            message: None,
            error: Some(error.into()),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = if self.success {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        };
        (status, Json(self)).into_response()
    }
}

// == Pagination ==
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// One page of a collection plus metadata about the whole collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T: Clone> Page<T> {
    /// Cuts page `page` (1-based) of size `limit` out of `items`.
    ///
    /// Pages past the end are empty; `total_pages = ceil(total / limit)`.
    /// Callers must pass `page >= 1` and `limit >= 1`.
    pub fn slice(items: &[T], page: usize, limit: usize) -> Self {
        let total = items.len();
        let start = page.saturating_sub(1).saturating_mul(limit).min(total);
        let end = start.saturating_add(limit).min(total);

        Self {
            data: items[start..end].to_vec(),
            pagination: Pagination {
                page,
                limit,
                total,
                total_pages: total.div_ceil(limit),
            },
        }
    }
}

impl<T> Page<T> {
    /// Empty page used as the payload of a failed listing.
    pub fn empty(page: usize, limit: usize) -> Self {
        Self {
            data: Vec::new(),
            pagination: Pagination {
                page,
                limit,
                total: 0,
                total_pages: 0,
            },
        }
    }
}
