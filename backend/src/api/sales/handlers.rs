//! Handler functions for the sales time-series endpoint.

use crate::errors::ApiError;
use crate::repositories::models::SalesPoint;
use crate::state::AppState;
use axum::extract::{Extension, Query};
use axum::response::Json;
use serde::Deserialize;

/// Query parameters for the sales series.
#[derive(Debug, Deserialize)]
pub struct SalesQuery {
    pub period: Option<String>,
}

/// Returns the sales series for the requested period.
///
/// `30d` produces a generated series from the jitter source; any other
/// period (including none) falls back to the fixed seven-day series.
#[axum::debug_handler]
pub async fn get_sales(
    Extension(state): Extension<AppState>,
    Query(query): Query<SalesQuery>,
) -> Result<Json<Vec<SalesPoint>>, ApiError> {
    let sales = match query.period.as_deref() {
        Some("30d") => state.metrics.sales_30d(&state.jitter),
        _ => state.metrics.sales_7d().to_vec(),
    };

    Ok(Json(sales))
}
