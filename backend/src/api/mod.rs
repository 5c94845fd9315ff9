//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for the metric-serving API
//! domains, excluding core authentication routes which are handled
//! separately.

pub mod analytics;
pub mod common;
pub mod kpi;
pub mod sales;
pub mod transaction;
pub mod user;
