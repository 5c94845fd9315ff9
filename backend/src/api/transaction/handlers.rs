//! Handler functions for transaction listing and querying.
//!
//! Filtering and pagination both happen here at request time: the
//! repository applies the status/search filters, and the page slice is
//! taken from the filtered collection.

use super::models::{TransactionListQuery, TransactionsResponse};
use crate::api::common::{PaginationMeta, paginate, validation_errors_to_message};
use crate::errors::ApiError;
use crate::state::AppState;
use axum::extract::{Extension, Query};
use axum::response::Json;
use validator::Validate;

/// Lists transactions with status/search filters and pagination.
///
/// The reported total reflects the filtered collection before the page
/// slice; an out-of-range page yields an empty list, not an error.
#[axum::debug_handler]
pub async fn list_transactions(
    Extension(state): Extension<AppState>,
    Query(query): Query<TransactionListQuery>,
) -> Result<Json<TransactionsResponse>, ApiError> {
    if let Err(validation_errors) = query.validate() {
        return Err(ApiError::validation(validation_errors_to_message(
            validation_errors,
        )));
    }

    let page = query.page();
    let limit = query.limit();

    let filtered = state
        .transactions
        .filter(query.status.as_deref(), query.search.as_deref());

    let pagination = PaginationMeta::new(page, limit, filtered.len() as u64);
    let transactions = paginate(&filtered, page, limit);

    Ok(Json(TransactionsResponse {
        transactions,
        pagination,
    }))
}
