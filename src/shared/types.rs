use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::pagination::{Page, Pagination};

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

/// Standard response envelope.
///
/// Success bodies carry `data`, error bodies carry `error`; absent fields are
/// left out of the JSON entirely.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Envelope for list endpoints that report pagination metadata
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub status: String,
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn error(error: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            status: STATUS_ERROR.to_string(),
            data: None,
            error: Some(error.into()),
        }
    }
}

impl<T> From<Page<T>> for PaginatedResponse<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            data: page.items,
            pagination: page.pagination,
        }
    }
}
