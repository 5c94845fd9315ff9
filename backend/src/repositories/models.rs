//! Rust structs that represent the service's domain records.
//!
//! These models define the accounts, transactions, and metrics data served
//! by the repositories. API-specific request/response shapes live next to
//! their endpoints and may differ from these.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A user account held by the credential store.
///
/// Immutable after creation. The password is stored as a bcrypt hash and
/// is never serialized to clients.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub email: String,
}

/// Client-safe projection of an [`Account`], without the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct PublicAccount {
    pub id: i64,
    pub username: String,
    pub role: Role,
    pub email: String,
}

impl From<&Account> for PublicAccount {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            role: account.role,
            email: account.email.clone(),
        }
    }
}

/// Access level attached to an account and its session tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            _ => Err(format!("Invalid role: {}", input)),
        }
    }
}

/// A single sales transaction in the read-only dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: i64,
    pub customer: String,
    pub amount: f64,
    /// ISO calendar date, e.g. `2024-01-07`.
    pub date: String,
    pub status: TransactionStatus,
    pub product: String,
    pub payment_method: String,
}

/// Lifecycle state of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
    Refunded,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Failed => "failed",
            TransactionStatus::Refunded => "refunded",
        }
    }
}

impl Display for TransactionStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "completed" => Ok(TransactionStatus::Completed),
            "pending" => Ok(TransactionStatus::Pending),
            "failed" => Ok(TransactionStatus::Failed),
            "refunded" => Ok(TransactionStatus::Refunded),
            _ => Err(format!("Invalid transaction status: {}", input)),
        }
    }
}

/// One day of aggregated sales figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesPoint {
    pub date: String,
    pub sales: u64,
    pub orders: u64,
    pub customers: u64,
}

/// Baseline KPI figures before per-request enrichment.
#[derive(Debug, Clone, Copy)]
pub struct KpiSnapshot {
    pub total_sales: u64,
    pub active_customers: u64,
    pub daily_revenue: u64,
    pub monthly_growth: f64,
    pub conversion_rate: f64,
    pub avg_order_value: u64,
    pub customer_retention: u64,
}

/// A product aggregate row in the analytics overview.
#[derive(Debug, Clone, Serialize)]
pub struct ProductSales {
    pub name: String,
    pub sales: u64,
    pub revenue: u64,
}

/// A regional aggregate row in the analytics overview.
#[derive(Debug, Clone, Serialize)]
pub struct RegionSales {
    pub region: String,
    pub sales: u64,
    pub percentage: f64,
}
