//! Fixed-window request rate limiting.
//!
//! Each limiter instance is one bucket: it tracks a counting window per
//! client key and denies once a window's count exceeds the limit. The two
//! buckets the router installs (general traffic and authentication) are
//! independent instances, so a denial in one never affects the other.

use crate::errors::ApiError;
use crate::state::AppState;
use axum::extract::{ConnectInfo, Extension, Request};
use axum::middleware::Next;
use axum::response::Response;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::warn;

/// Counting window for one client key.
#[derive(Debug)]
struct RateWindow {
    window_start: Instant,
    count: u32,
}

/// Fixed-window request counter keyed by client.
#[derive(Debug, Clone)]
pub struct FixedWindowLimiter {
    windows: Arc<RwLock<HashMap<String, RateWindow>>>,
    max_requests: u32,
    window: Duration,
}

impl FixedWindowLimiter {
    /// Creates a limiter allowing `max_requests` per `window` per client.
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            windows: Arc::new(RwLock::new(HashMap::new())),
            max_requests,
            window,
        }
    }

    /// Records a request for `client_key` and reports whether it is within
    /// the limit.
    ///
    /// The whole read-modify-write runs under a single write-lock
    /// acquisition, so two concurrent requests from the same key can never
    /// both observe a stale count. Expired windows are pruned on entry,
    /// which doubles as the per-key window reset.
    pub async fn allow(&self, client_key: &str) -> bool {
        let mut windows = self.windows.write().await;
        let now = Instant::now();

        windows.retain(|_, window| now.duration_since(window.window_start) <= self.window);

        let window = windows
            .entry(client_key.to_string())
            .or_insert(RateWindow {
                window_start: now,
                count: 0,
            });

        window.count += 1;
        window.count <= self.max_requests
    }
}

/// Router-wide rate limit middleware (general bucket).
pub async fn general_rate_limit(
    Extension(state): Extension<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    enforce(&state.general_limiter, "general", request, next).await
}

/// Login-route rate limit middleware (authentication bucket).
pub async fn auth_rate_limit(
    Extension(state): Extension<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    enforce(&state.auth_limiter, "authentication", request, next).await
}

async fn enforce(
    limiter: &FixedWindowLimiter,
    bucket: &str,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let client_key = client_key(&request);

    if !limiter.allow(&client_key).await {
        warn!(
            "Rate limit exceeded for client {} on the {} bucket",
            client_key, bucket
        );
        return Err(ApiError::RateLimited);
    }

    Ok(next.run(request).await)
}

/// Derives the rate-limit key for a request: the forwarded client address
/// when a proxy provides one, else the peer address, else a shared
/// fallback key.
fn client_key(request: &Request) -> String {
    if let Some(forwarded) = request.headers().get("x-forwarded-for") {
        if let Ok(value) = forwarded.to_str() {
            if let Some(ip) = value.split(',').next() {
                let ip = ip.trim();
                if !ip.is_empty() {
                    return ip.to_string();
                }
            }
        }
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|connect_info| connect_info.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
