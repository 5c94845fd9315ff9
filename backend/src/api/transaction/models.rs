//! Request and response shapes for the transactions listing.

use crate::api::common::PaginationMeta;
use crate::repositories::models::TransactionRecord;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters accepted by the transactions listing.
#[derive(Debug, Deserialize, Validate)]
pub struct TransactionListQuery {
    /// Page number (1-indexed)
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u32>,

    /// Number of items per page
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    pub limit: Option<u32>,

    /// Status to match exactly; `all` disables the filter
    pub status: Option<String>,

    /// Case-insensitive customer/product search term
    pub search: Option<String>,
}

impl TransactionListQuery {
    /// Get page number with default
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    /// Get limit with default
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(10)
    }
}

/// Paginated transactions response
#[derive(Debug, Serialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<TransactionRecord>,
    pub pagination: PaginationMeta,
}
