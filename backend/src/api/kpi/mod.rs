//! Module for the KPI dashboard endpoint.

pub mod handlers;
pub mod routes;
