//! Handler functions for user management API endpoints.

use crate::errors::ApiError;
use crate::repositories::models::PublicAccount;
use crate::state::AppState;
use axum::extract::Extension;
use axum::response::Json;

/// Lists every account without its password hash.
///
/// The admin role check happens in the route's guard before this runs.
#[axum::debug_handler]
pub async fn list_users(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<PublicAccount>>, ApiError> {
    let users: Vec<PublicAccount> = state.accounts.all().iter().map(PublicAccount::from).collect();

    Ok(Json(users))
}
