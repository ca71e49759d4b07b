//! Offset-based pagination for database queries.
//!
//! Queries push filtering, ordering, and LIMIT/OFFSET down to the database
//! and wrap the result in a [`Page`] envelope carrying the page metadata.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Maximum number of items per page.
pub const MAX_LIMIT: i64 = 1000;

/// Pagination parameters for database queries.
///
/// Values are clamped on construction so a query can never be built with a
/// non-positive limit or a negative offset. Callers that need to reject bad
/// input instead of clamping it validate before constructing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Pagination {
    /// Maximum number of records to return.
    pub limit: i64,
    /// Number of records to skip.
    pub offset: i64,
}

impl Pagination {
    /// Creates a new pagination instance.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: limit.clamp(1, MAX_LIMIT),
            offset: offset.max(0),
        }
    }

    /// Creates pagination from a 1-based page number and page size.
    pub fn from_page(page: i64, page_size: i64) -> Self {
        let page = page.max(1);
        let page_size = page_size.clamp(1, MAX_LIMIT);
        Self::new(page_size, (page - 1) * page_size)
    }

    /// Gets the current page number (1-based).
    pub fn page_number(&self) -> i64 {
        (self.offset / self.limit) + 1
    }

    /// Gets the page size.
    pub fn page_size(&self) -> i64 {
        self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(10, 0)
    }
}

/// Result of a paginated query.
///
/// `items` holds exactly the sub-range
/// `[(page_number - 1) * page_size, page_number * page_size)` of the full
/// filtered, ordered result set, clamped to the set bounds. Requesting a
/// page past the end yields an empty `items`, never an error.
#[must_use]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The 1-based page number of this page.
    pub page_number: i64,
    /// The requested page size.
    pub page_size: i64,
    /// Total number of pages; zero when no items match.
    pub total_pages: i64,
    /// Total count of items matching the query (across all pages).
    pub total_elements: i64,
    /// The items in this page, at most `page_size` of them.
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Creates a page envelope from a fetched sub-range and the total count.
    ///
    /// The page count rounds up: a remainder still needs a page.
    pub fn new(pagination: Pagination, total_elements: i64, items: Vec<T>) -> Self {
        let total_elements = total_elements.max(0);
        Self {
            page_number: pagination.page_number(),
            page_size: pagination.page_size(),
            total_pages: (total_elements + pagination.limit - 1) / pagination.limit,
            total_elements,
            items,
        }
    }

    /// Creates a page by slicing a full in-memory result set.
    ///
    /// Bounds are clamped to the set size, so an offset past the end
    /// produces an empty page rather than an out-of-range access.
    pub fn from_slice(items: Vec<T>, pagination: Pagination) -> Self {
        let total_elements = items.len() as i64;
        let sliced = items
            .into_iter()
            .skip(pagination.offset as usize)
            .take(pagination.limit as usize)
            .collect();

        Self::new(pagination, total_elements, sliced)
    }

    /// Creates an empty page.
    pub fn empty(pagination: Pagination) -> Self {
        Self::new(pagination, 0, Vec::new())
    }

    /// Maps the items to a different type, preserving the page metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            page_number: self.page_number,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_elements: self.total_elements,
            items: self.items.into_iter().map(f).collect(),
        }
    }

    /// Returns whether there are more pages after this one.
    pub fn has_more(&self) -> bool {
        self.page_number < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_new() {
        let pagination = Pagination::new(25, 100);
        assert_eq!(pagination.limit, 25);
        assert_eq!(pagination.offset, 100);
    }

    #[test]
    fn pagination_bounds_checking() {
        // Test limit bounds
        let pagination = Pagination::new(0, 10);
        assert_eq!(pagination.limit, 1);

        let pagination = Pagination::new(1500, 10);
        assert_eq!(pagination.limit, MAX_LIMIT);

        // Test offset bounds
        let pagination = Pagination::new(10, -5);
        assert_eq!(pagination.offset, 0);
    }

    #[test]
    fn pagination_from_page() {
        let pagination = Pagination::from_page(1, 20);
        assert_eq!(pagination.limit, 20);
        assert_eq!(pagination.offset, 0);

        let pagination = Pagination::from_page(2, 20);
        assert_eq!(pagination.limit, 20);
        assert_eq!(pagination.offset, 20);

        let pagination = Pagination::from_page(3, 10);
        assert_eq!(pagination.limit, 10);
        assert_eq!(pagination.offset, 20);

        let pagination = Pagination::from_page(0, 20);
        assert_eq!(pagination.offset, 0);

        let pagination = Pagination::from_page(1, 0);
        assert_eq!(pagination.limit, 1);
    }

    #[test]
    fn pagination_page_number() {
        let pagination = Pagination::new(20, 0);
        assert_eq!(pagination.page_number(), 1);

        let pagination = Pagination::new(20, 20);
        assert_eq!(pagination.page_number(), 2);

        let pagination = Pagination::new(10, 25);
        assert_eq!(pagination.page_number(), 3);
    }

    #[test]
    fn page_total_pages_rounds_up() {
        let pagination = Pagination::from_page(1, 10);

        let page = Page::new(pagination, 25, vec![0; 10]);
        assert_eq!(page.total_pages, 3);

        let page = Page::new(pagination, 30, vec![0; 10]);
        assert_eq!(page.total_pages, 3);

        let page = Page::new(pagination, 31, vec![0; 10]);
        assert_eq!(page.total_pages, 4);

        let page = Page::new(pagination, 1, vec![0]);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn page_zero_total_is_zero_pages() {
        let page: Page<i32> = Page::new(Pagination::from_page(1, 10), 0, vec![]);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_elements, 0);
        assert!(page.items.is_empty());
        assert!(!page.has_more());
    }

    #[test]
    fn page_from_slice_partial_last_page() {
        // 23 items, page 3 of size 10: the last partial page holds 3 items.
        let items: Vec<i32> = (1..=23).collect();
        let page = Page::from_slice(items, Pagination::from_page(3, 10));

        assert_eq!(page.page_number, 3);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_elements, 23);
        assert_eq!(page.items, vec![21, 22, 23]);
    }

    #[test]
    fn page_from_slice_exact_boundary() {
        let items: Vec<i32> = (1..=20).collect();

        let page = Page::from_slice(items.clone(), Pagination::from_page(2, 10));
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total_pages, 2);
        assert!(!page.has_more());

        let page = Page::from_slice(items, Pagination::from_page(3, 10));
        assert!(page.items.is_empty());
        assert_eq!(page.total_elements, 20);
    }

    #[test]
    fn page_from_slice_beyond_last_page_is_empty() {
        let items: Vec<i32> = (1..=5).collect();
        let page = Page::from_slice(items, Pagination::from_page(40, 10));

        assert!(page.items.is_empty());
        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn page_item_count_matches_window() {
        // items length == min(page_size, max(0, total - (page - 1) * page_size))
        for total in 0..40i64 {
            for page_number in 1..6i64 {
                let items: Vec<i64> = (0..total).collect();
                let pagination = Pagination::from_page(page_number, 7);
                let page = Page::from_slice(items, pagination);

                let expected = 7.min((total - (page_number - 1) * 7).max(0));
                assert_eq!(page.items.len() as i64, expected);
            }
        }
    }

    #[test]
    fn page_map_preserves_metadata() {
        let page = Page::from_slice((1..=23).collect::<Vec<i32>>(), Pagination::from_page(2, 10));
        let mapped = page.map(|n| n.to_string());

        assert_eq!(mapped.page_number, 2);
        assert_eq!(mapped.total_pages, 3);
        assert_eq!(mapped.total_elements, 23);
        assert_eq!(mapped.items.len(), 10);
        assert_eq!(mapped.items[0], "11");
        assert!(mapped.has_more());
    }

    #[test]
    fn page_serializes_camel_case() {
        let page = Page::from_slice(vec![1, 2, 3], Pagination::from_page(1, 2));
        let json = serde_json::to_value(&page).expect("page serializes");

        assert_eq!(json["pageNumber"], 1);
        assert_eq!(json["pageSize"], 2);
        assert_eq!(json["totalPages"], 2);
        assert_eq!(json["totalElements"], 3);
        assert_eq!(json["items"], serde_json::json!([1, 2]));
    }

    #[test]
    fn page_empty() {
        let page: Page<i32> = Page::empty(Pagination::from_page(1, 10));
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }
}
