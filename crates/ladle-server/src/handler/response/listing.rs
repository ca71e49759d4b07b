//! Dual-shape listing response.

use axum::Json;
use axum::response::{IntoResponse, Response};
use ladle_postgres::types::Page;
use schemars::JsonSchema;
use serde::Serialize;

/// Response for list/search endpoints.
///
/// Serializes as a plain JSON array when no paging was requested and as a
/// page envelope (`pageNumber`, `pageSize`, `totalPages`, `totalElements`,
/// `items`) when any paging or sorting parameter was present.
#[must_use]
#[derive(Debug)]
pub enum Listing<T> {
    /// The full filtered result set.
    Plain(Vec<T>),
    /// One page of the filtered result set.
    Paged(Page<T>),
}

impl<T> Listing<T> {
    /// Wraps a full result set.
    pub fn plain(items: Vec<T>) -> Self {
        Self::Plain(items)
    }

    /// Wraps a page envelope.
    pub fn paged(page: Page<T>) -> Self {
        Self::Paged(page)
    }

    /// Returns the number of items carried in this response.
    pub fn len(&self) -> usize {
        match self {
            Self::Plain(items) => items.len(),
            Self::Paged(page) => page.items.len(),
        }
    }

    /// Returns whether this response carries no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Serialize> IntoResponse for Listing<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Plain(items) => Json(items).into_response(),
            Self::Paged(page) => Json(page).into_response(),
        }
    }
}

impl<T> aide::OperationOutput for Listing<T>
where
    T: JsonSchema,
{
    type Inner = Vec<T>;
}

#[cfg(test)]
mod tests {
    use ladle_postgres::types::Pagination;

    use super::*;

    #[test]
    fn plain_serializes_as_bare_array() {
        let listing = Listing::plain(vec![1, 2, 3]);
        assert_eq!(listing.len(), 3);

        let response = listing.into_response();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }

    #[test]
    fn paged_carries_envelope_items() {
        let page = Page::from_slice((1..=23).collect::<Vec<i32>>(), Pagination::from_page(3, 10));
        let listing = Listing::paged(page);

        assert_eq!(listing.len(), 3);
        assert!(!listing.is_empty());
    }
}
