//! Defines the HTTP route for sales series data.

use super::handlers::get_sales;
use crate::auth::middleware::jwt_auth;
use axum::{Router, middleware, routing::get};

pub fn sales_router() -> Router {
    Router::new().route(
        "/sales",
        get(get_sales).layer(middleware::from_fn(jwt_auth)),
    )
}
