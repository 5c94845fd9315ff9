//! Main entry point for the metrics dashboard backend.
//!
//! This file initializes the Axum web server, builds the shared
//! application state, and registers all API routes and middleware.
//! It orchestrates the application's startup and defines its overall
//! structure.

mod api;
mod auth;
mod config;
mod errors;
mod repositories;
mod services;
mod state;
mod utils;

use crate::errors::ApiError;
use crate::services::rate_limiter::general_rate_limit;
use crate::state::AppState;
use axum::{Extension, Router, middleware, response::Json, routing::get};
use config::Config;
use serde_json::{Value, json};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::fmt::init;

#[tokio::main]
async fn main() {
    init();

    let config = Config::from_env().unwrap();
    let state = AppState::new(config);
    let bind_address = format!("0.0.0.0:{}", state.config.server_port);

    let app = app(state).into_make_service_with_connect_info::<SocketAddr>();

    let listener = tokio::net::TcpListener::bind(&bind_address).await.unwrap();

    info!("Starting metrics backend on {}", bind_address);
    axum::serve(listener, app).await.unwrap();
}

/// Assembles the full request pipeline.
///
/// Shared state and the general rate-limit bucket wrap every route
/// (including the 404 fallback); the authentication bucket and the
/// token/role guards sit on their specific routes.
fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(auth::routes::auth_router())
        .merge(api::kpi::routes::kpi_router())
        .merge(api::sales::routes::sales_router())
        .merge(api::transaction::routes::transaction_router())
        .merge(api::analytics::routes::analytics_router())
        .merge(api::user::routes::user_router())
        .fallback(fallback_handler)
        .layer(middleware::from_fn(general_rate_limit))
        .layer(Extension(state))
}

async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn fallback_handler() -> ApiError {
    ApiError::NotFound
}
