//! Central module for application-wide configuration settings.
//!
//! This module handles loading and managing configuration parameters such as
//! the server port, token signing secret, and rate limit budgets.

use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub jwt_secret: String,
    pub jwt_expires_in_seconds: u64,
    pub rate_limit_window_seconds: u64,
    pub general_rate_limit: u32,
    pub auth_rate_limit: u32,
    pub kpi_jitter_seed: Option<u64>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .context("SERVER_PORT must be a valid number")?;

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using the development default");
            "your-secret-key-change-in-production".to_string()
        });

        let jwt_expires_in_seconds = env::var("JWT_EXPIRES_IN_SECONDS")
            .unwrap_or_else(|_| "86400".to_string())
            .parse::<u64>()
            .context("JWT_EXPIRES_IN_SECONDS must be a valid number")?;

        let rate_limit_window_seconds = env::var("RATE_LIMIT_WINDOW_SECONDS")
            .unwrap_or_else(|_| "900".to_string())
            .parse::<u64>()
            .context("RATE_LIMIT_WINDOW_SECONDS must be a valid number")?;

        let general_rate_limit = env::var("GENERAL_RATE_LIMIT")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u32>()
            .context("GENERAL_RATE_LIMIT must be a valid number")?;

        let auth_rate_limit = env::var("AUTH_RATE_LIMIT")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .context("AUTH_RATE_LIMIT must be a valid number")?;

        let kpi_jitter_seed = match env::var("KPI_JITTER_SEED") {
            Ok(value) => Some(
                value
                    .parse::<u64>()
                    .context("KPI_JITTER_SEED must be a valid number")?,
            ),
            Err(_) => None,
        };

        Ok(Config {
            server_port,
            jwt_secret,
            jwt_expires_in_seconds,
            rate_limit_window_seconds,
            general_rate_limit,
            auth_rate_limit,
            kpi_jitter_seed,
        })
    }
}
