//! Shared application state threaded through the router.
//!
//! Bundles the configuration, token utilities, repositories, rate
//! limiters, and jitter source behind one cheaply clonable handle that
//! handlers and middleware receive via `Extension`.

use crate::config::Config;
use crate::repositories::account_repository::AccountRepository;
use crate::repositories::metrics_repository::MetricsRepository;
use crate::repositories::transaction_repository::TransactionRepository;
use crate::services::jitter::JitterSource;
use crate::services::rate_limiter::FixedWindowLimiter;
use crate::utils::jwt::JwtUtils;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub jwt_utils: JwtUtils,
    pub accounts: AccountRepository,
    pub transactions: TransactionRepository,
    pub metrics: MetricsRepository,
    pub general_limiter: FixedWindowLimiter,
    pub auth_limiter: FixedWindowLimiter,
    pub jitter: JitterSource,
}

impl AppState {
    /// Builds the state with the seeded demo dataset.
    pub fn new(config: Config) -> Self {
        let window = Duration::from_secs(config.rate_limit_window_seconds);
        let jitter = match config.kpi_jitter_seed {
            Some(seed) => JitterSource::seeded(seed),
            None => JitterSource::from_entropy(),
        };

        AppState {
            jwt_utils: JwtUtils::new(&config),
            accounts: AccountRepository::seeded(),
            transactions: TransactionRepository::seeded(),
            metrics: MetricsRepository::seeded(),
            general_limiter: FixedWindowLimiter::new(config.general_rate_limit, window),
            auth_limiter: FixedWindowLimiter::new(config.auth_rate_limit, window),
            jitter,
            config,
        }
    }
}
