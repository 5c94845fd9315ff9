//! Credential store for user accounts.
//!
//! Provides read-only lookups over the seeded account set. There is no
//! update path; accounts are immutable for the lifetime of the process.

use crate::repositories::models::{Account, Role};
use std::sync::Arc;

/// bcrypt hash of the demo password shared by the seeded accounts.
const DEMO_PASSWORD_HASH: &str = "$2a$10$92IXUNpkjO0rOQ5byMi.Ye4oKoEa3Ro9llC/.og/at2.uheWG/igi";

/// Repository for account lookups.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    accounts: Arc<Vec<Account>>,
}

impl AccountRepository {
    /// Creates a repository over an explicit account set.
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Arc::new(accounts),
        }
    }

    /// Creates a repository seeded with the demo accounts.
    pub fn seeded() -> Self {
        Self::new(vec![
            Account {
                id: 1,
                username: "admin".to_string(),
                password_hash: DEMO_PASSWORD_HASH.to_string(),
                role: Role::Admin,
                email: "admin@company.com".to_string(),
            },
            Account {
                id: 2,
                username: "user".to_string(),
                password_hash: DEMO_PASSWORD_HASH.to_string(),
                role: Role::User,
                email: "user@company.com".to_string(),
            },
        ])
    }

    /// Retrieves an account by its username.
    ///
    /// Lookups are case-sensitive exact matches: `Admin` and `admin` are
    /// different usernames.
    ///
    /// # Returns
    /// `Some(&Account)` if found, `None` otherwise
    pub fn find_by_username(&self, username: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.username == username)
    }

    /// Returns every account, hashes included.
    ///
    /// Callers expose accounts to clients through
    /// [`PublicAccount`](crate::repositories::models::PublicAccount) only.
    pub fn all(&self) -> &[Account] {
        &self.accounts
    }
}
