//! Defines the HTTP route for KPI data.

use super::handlers::get_kpis;
use crate::auth::middleware::jwt_auth;
use axum::{Router, middleware, routing::get};

pub fn kpi_router() -> Router {
    Router::new().route("/kpis", get(get_kpis).layer(middleware::from_fn(jwt_auth)))
}
