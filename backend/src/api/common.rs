//! Shared helpers for the list endpoints.
//!
//! Provides:
//! - Pagination metadata in the wire format clients expect
//! - A bounds-clamped page slice over an already filtered collection
//! - Validation error formatting for query/body payloads
//!
//! Pagination always operates on the filtered collection: `total_items`
//! counts records after filtering and before the page slice is taken.

use serde::Serialize;

/// Pagination metadata for list responses
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Current page number (1-indexed)
    pub current_page: u32,
    /// Total number of pages
    pub total_pages: u32,
    /// Total number of items across all pages, counted after filtering
    pub total_items: u64,
    /// Number of items per page
    pub items_per_page: u32,
}

impl PaginationMeta {
    /// Create pagination metadata from page parameters and the filtered
    /// item count. An empty collection has zero pages.
    pub fn new(current_page: u32, items_per_page: u32, total_items: u64) -> Self {
        let total_pages = total_items.div_ceil(items_per_page as u64) as u32;

        Self {
            current_page,
            total_pages,
            total_items,
            items_per_page,
        }
    }
}

/// Apply pagination to a filtered collection.
///
/// `page` is 1-based; a page past the end of the collection yields an
/// empty list rather than an error.
pub fn paginate<T: Clone>(items: &[T], page: u32, limit: u32) -> Vec<T> {
    let offset = (page as usize - 1) * limit as usize;

    items
        .iter()
        .skip(offset)
        .take(limit as usize)
        .cloned()
        .collect()
}

/// Flattens validator errors into one human-readable message.
pub fn validation_errors_to_message(errors: validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                format!(
                    "{}: {}",
                    field,
                    error.message.as_ref().unwrap_or(&"Invalid value".into())
                )
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_meta_calculation() {
        // Partial last page rounds up.
        let meta = PaginationMeta::new(2, 10, 25);
        assert_eq!(meta.current_page, 2);
        assert_eq!(meta.items_per_page, 10);
        assert_eq!(meta.total_items, 25);
        assert_eq!(meta.total_pages, 3);

        // Exact multiple.
        let meta = PaginationMeta::new(1, 5, 10);
        assert_eq!(meta.total_pages, 2);

        // Empty result set has zero pages.
        let meta = PaginationMeta::new(1, 10, 0);
        assert_eq!(meta.total_pages, 0);

        // The requested page does not affect the totals.
        let meta = PaginationMeta::new(99, 10, 5);
        assert_eq!(meta.total_pages, 1);
        assert_eq!(meta.total_items, 5);
    }

    #[test]
    fn test_paginate_slices_and_clamps() {
        let items = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

        assert_eq!(paginate(&items, 2, 3), vec![4, 5, 6]);
        assert_eq!(paginate(&items, 1, 20), items);
        assert_eq!(paginate(&items, 4, 3), vec![10]);
        assert!(paginate(&items, 99, 10).is_empty());
    }

    #[test]
    fn test_page_length_invariant() {
        let items: Vec<u32> = (1..=23).collect();
        let total = items.len() as i64;

        for page in 1..=6u32 {
            for limit in [1u32, 5, 10, 23, 50] {
                let expected = (total - i64::from(page - 1) * i64::from(limit))
                    .clamp(0, i64::from(limit)) as usize;
                assert_eq!(paginate(&items, page, limit).len(), expected);
            }
        }
    }
}
