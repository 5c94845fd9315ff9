//! Module for core infrastructure services.
//!
//! This module encapsulates the request rate limiting and the seedable
//! jitter source used to enrich the mock metrics, keeping both behind
//! small injectable handles.

pub mod jitter;
pub mod rate_limiter;
