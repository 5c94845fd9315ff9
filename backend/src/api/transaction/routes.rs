//! Defines the HTTP route for transaction listing.

use super::handlers::list_transactions;
use crate::auth::middleware::jwt_auth;
use axum::{Router, middleware, routing::get};

pub fn transaction_router() -> Router {
    Router::new().route(
        "/transactions",
        get(list_transactions).layer(middleware::from_fn(jwt_auth)),
    )
}
