//! Read-only transaction dataset and its record-level query engine.
//!
//! Filtering is a pure function of the records and the requested
//! status/search values; pagination happens afterwards in the handlers
//! (see `api::common`).

use crate::repositories::models::{TransactionRecord, TransactionStatus};
use std::sync::Arc;

/// Sentinel status value meaning "no status filter".
const STATUS_ALL: &str = "all";

/// Repository over the ordered transaction collection.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    records: Arc<Vec<TransactionRecord>>,
}

impl TransactionRepository {
    /// Creates a repository over an explicit record set.
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    /// Creates a repository seeded with the demo transactions.
    pub fn seeded() -> Self {
        Self::new(vec![
            TransactionRecord {
                id: 1,
                customer: "John Doe".to_string(),
                amount: 299.0,
                date: "2024-01-07".to_string(),
                status: TransactionStatus::Completed,
                product: "Premium Package".to_string(),
                payment_method: "Credit Card".to_string(),
            },
            TransactionRecord {
                id: 2,
                customer: "Jane Smith".to_string(),
                amount: 156.0,
                date: "2024-01-07".to_string(),
                status: TransactionStatus::Completed,
                product: "Standard Package".to_string(),
                payment_method: "PayPal".to_string(),
            },
            TransactionRecord {
                id: 3,
                customer: "Bob Johnson".to_string(),
                amount: 89.0,
                date: "2024-01-06".to_string(),
                status: TransactionStatus::Pending,
                product: "Basic Package".to_string(),
                payment_method: "Credit Card".to_string(),
            },
            TransactionRecord {
                id: 4,
                customer: "Alice Brown".to_string(),
                amount: 432.0,
                date: "2024-01-06".to_string(),
                status: TransactionStatus::Completed,
                product: "Enterprise Package".to_string(),
                payment_method: "Bank Transfer".to_string(),
            },
            TransactionRecord {
                id: 5,
                customer: "Charlie Wilson".to_string(),
                amount: 178.0,
                date: "2024-01-05".to_string(),
                status: TransactionStatus::Completed,
                product: "Standard Package".to_string(),
                payment_method: "Credit Card".to_string(),
            },
        ])
    }

    /// Applies the status and search filters conjunctively, preserving
    /// dataset order.
    ///
    /// A `status` of `"all"` (or none at all) keeps every record; any other
    /// value must equal a record's status exactly, so an unrecognized
    /// status matches nothing. The search term matches case-insensitively
    /// against the customer or product fields; an absent or empty term is a
    /// no-op.
    pub fn filter(&self, status: Option<&str>, search: Option<&str>) -> Vec<TransactionRecord> {
        let status = status.filter(|value| *value != STATUS_ALL);
        let search = search
            .map(str::to_lowercase)
            .filter(|term| !term.is_empty());

        self.records
            .iter()
            .filter(|record| match status {
                Some(value) => record.status.as_str() == value,
                None => true,
            })
            .filter(|record| match &search {
                Some(term) => {
                    record.customer.to_lowercase().contains(term)
                        || record.product.to_lowercase().contains(term)
                }
                None => true,
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter_matches_exactly() {
        let repo = TransactionRepository::seeded();

        let completed = repo.filter(Some("completed"), None);
        assert_eq!(completed.len(), 4);
        assert!(
            completed
                .iter()
                .all(|record| record.status == TransactionStatus::Completed)
        );

        assert_eq!(repo.filter(Some("pending"), None).len(), 1);
    }

    #[test]
    fn test_all_sentinel_and_absent_status_keep_everything() {
        let repo = TransactionRepository::seeded();

        assert_eq!(repo.filter(Some("all"), None).len(), 5);
        assert_eq!(repo.filter(None, None).len(), 5);
    }

    #[test]
    fn test_unrecognized_status_matches_nothing() {
        let repo = TransactionRepository::seeded();

        assert!(repo.filter(Some("shipped"), None).is_empty());
        // The sentinel is exact too; a cased variant is just another
        // unknown status.
        assert!(repo.filter(Some("All"), None).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_over_customer_and_product() {
        let repo = TransactionRepository::seeded();

        let by_customer = repo.filter(None, Some("JANE"));
        assert_eq!(by_customer.len(), 1);
        assert_eq!(by_customer[0].customer, "Jane Smith");

        let by_product = repo.filter(None, Some("premium"));
        assert_eq!(by_product.len(), 1);
        assert_eq!(by_product[0].product, "Premium Package");

        // Matches either field.
        assert_eq!(repo.filter(None, Some("package")).len(), 5);
    }

    #[test]
    fn test_empty_search_is_a_no_op() {
        let repo = TransactionRepository::seeded();

        assert_eq!(repo.filter(None, Some("")).len(), 5);
    }

    #[test]
    fn test_filters_compose_conjunctively() {
        let repo = TransactionRepository::seeded();

        let filtered = repo.filter(Some("completed"), Some("standard"));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|record| {
            record.status == TransactionStatus::Completed
                && record.product.to_lowercase().contains("standard")
        }));
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let repo = TransactionRepository::seeded();

        let once = repo.filter(Some("completed"), Some("package"));
        let twice =
            TransactionRepository::new(once.clone()).filter(Some("completed"), Some("package"));

        assert_eq!(once, twice);
    }
}
