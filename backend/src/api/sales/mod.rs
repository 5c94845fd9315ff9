//! Module for the sales time-series endpoint.

pub mod handlers;
pub mod routes;
