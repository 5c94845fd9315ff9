//! Handler functions for authentication-related API endpoints.
//!
//! These functions process incoming login requests, parse request data,
//! and delegate credential checks and token issuance to the
//! `auth::service`.

use crate::auth::models::{LoginRequest, LoginResponse};
use crate::auth::service::AuthService;
use crate::errors::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Extension, Json},
    response::Json as ResponseJson,
};

/// Handle user login request
#[axum::debug_handler]
pub async fn login(
    Extension(state): Extension<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<ResponseJson<LoginResponse>, ApiError> {
    let auth_service = AuthService::new(&state.accounts, &state.jwt_utils);
    let response = auth_service.login(payload).await?;
    Ok(ResponseJson(response))
}
