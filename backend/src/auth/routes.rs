//! Defines the HTTP routes specifically for authentication.
//!
//! These are designed to be merged into the main Axum router.

use crate::auth::handlers::login;
use crate::services::rate_limiter::auth_rate_limit;
use axum::{Router, middleware, routing::post};

/// Creates the authentication router.
///
/// Login carries the stricter authentication rate-limit bucket on top of
/// the router-wide general bucket.
pub fn auth_router() -> Router {
    Router::new().route(
        "/login",
        post(login).layer(middleware::from_fn(auth_rate_limit)),
    )
}
