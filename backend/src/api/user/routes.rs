//! Defines the HTTP routes for user management.
//!
//! Listing accounts is admin-only: the token guard runs first, then the
//! role guard, so a missing or invalid token short-circuits before any
//! role check.

use super::handlers::list_users;
use crate::auth::middleware::{admin_auth, jwt_auth};
use axum::{Router, middleware, routing::get};

pub fn user_router() -> Router {
    Router::new().route(
        "/users",
        get(list_users)
            .layer(middleware::from_fn(admin_auth))
            .layer(middleware::from_fn(jwt_auth)),
    )
}
