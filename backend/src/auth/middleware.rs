//! Middleware for protecting authenticated routes and handling authorization.
//!
//! This module contains the bearer-token authentication layer and the
//! admin role guard applied on top of it.

use crate::errors::ApiError;
use crate::state::AppState;
use crate::utils::jwt::Claims;
use axum::{
    extract::{Extension, Request},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

/// JWT authentication middleware.
///
/// A missing (or non-Bearer) Authorization header and a token that fails
/// validation are distinct errors; either one short-circuits the request
/// before the handler runs.
pub async fn jwt_auth(
    Extension(state): Extension<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or(ApiError::MissingToken)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(ApiError::MissingToken)?;

    let claims = state.jwt_utils.validate_token(token)?;

    // Add claims to request extensions for use in handlers and guards
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Admin role authorization middleware.
///
/// Expects `jwt_auth` to have run first; the role is only known once the
/// claims have been extracted. Role matching is exact, with no hierarchy.
pub async fn admin_auth(request: Request, next: Next) -> Result<Response, ApiError> {
    let claims = request
        .extensions()
        .get::<Claims>()
        .ok_or(ApiError::MissingToken)?;

    if !claims.is_admin() {
        return Err(ApiError::Forbidden);
    }

    Ok(next.run(request).await)
}
