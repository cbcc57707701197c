use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

// =============================================================================
// REQUEST
// =============================================================================

/// A validated page window: 1-based page number plus page size.
///
/// Construction through [`PageRequest::from_params`] is lenient. Anything that
/// is not a valid number in range falls back to the default instead of
/// producing an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Build a request from raw query-string values.
    pub fn from_params(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = page
            .and_then(|p| p.parse::<usize>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(DEFAULT_PAGE);

        let limit = limit
            .and_then(|l| l.parse::<usize>().ok())
            .filter(|l| (1..=MAX_PAGE_SIZE).contains(l))
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self { page, limit }
    }

    /// Offset of the first item on this page. Saturates for absurd page numbers.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

// =============================================================================
// RESPONSE
// =============================================================================

/// Pagination metadata for list responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    /// Number of items after filtering, before windowing
    pub total: usize,
    /// Never less than 1, even for an empty result
    pub total_pages: usize,
}

impl Pagination {
    pub fn new(request: PageRequest, total: usize) -> Self {
        let limit = request.limit.max(1);
        Self {
            page: request.page,
            limit,
            total,
            total_pages: total.div_ceil(limit).max(1),
        }
    }
}

/// One window of an ordered sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    /// Convert the items, keeping the metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}

/// Cut the page described by `request` out of `items`.
///
/// The window is `[offset, offset + limit)` clipped to the slice. A window that
/// starts past the end yields an empty page with the metadata still filled in.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let pagination = Pagination::new(request, items.len());
    let start = request.offset().min(items.len());
    let end = start.saturating_add(pagination.limit).min(items.len());

    Page {
        items: items.get(start..end).map(<[T]>::to_vec).unwrap_or_default(),
        pagination,
    }
}
