//! Defines the HTTP route for analytics rollups.

use super::handlers::get_overview;
use crate::auth::middleware::jwt_auth;
use axum::{Router, middleware, routing::get};

pub fn analytics_router() -> Router {
    Router::new().route(
        "/analytics/overview",
        get(get_overview).layer(middleware::from_fn(jwt_auth)),
    )
}
