//! Handler functions for analytics rollup endpoints.

use crate::errors::ApiError;
use crate::repositories::models::{ProductSales, RegionSales};
use crate::state::AppState;
use axum::extract::Extension;
use axum::response::Json;
use serde::Serialize;

/// Aggregate view across revenue, orders, products, and regions.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsOverview {
    pub total_revenue: u64,
    pub total_orders: u64,
    pub average_order_value: u64,
    pub top_products: Vec<ProductSales>,
    pub sales_by_region: Vec<RegionSales>,
}

/// Returns the analytics overview.
///
/// Total revenue and average order value come from the KPI snapshot;
/// total orders is the sum over the seven-day sales series.
#[axum::debug_handler]
pub async fn get_overview(
    Extension(state): Extension<AppState>,
) -> Result<Json<AnalyticsOverview>, ApiError> {
    let kpis = state.metrics.kpis();

    Ok(Json(AnalyticsOverview {
        total_revenue: kpis.total_sales,
        total_orders: state.metrics.total_orders_7d(),
        average_order_value: kpis.avg_order_value,
        top_products: state.metrics.top_products().to_vec(),
        sales_by_region: state.metrics.sales_by_region().to_vec(),
    }))
}
