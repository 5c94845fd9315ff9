//! In-memory repositories backing the API handlers.
//!
//! Handlers depend only on these read interfaces; the seeded demo data
//! behind them stands in for a real database and is never mutated.

pub mod account_repository;
pub mod metrics_repository;
pub mod models;
pub mod transaction_repository;
