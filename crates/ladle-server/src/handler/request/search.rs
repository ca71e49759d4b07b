//! Search, sorting, and pagination query parameters.

use std::str::FromStr;

use ladle_postgres::types::{Pagination, SortBy, SortOrder};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::handler::{ErrorKind, Result};

/// Query parameters accepted by every search/list endpoint.
///
/// The presence of any of `page`, `pageSize`, `sortBy`, or `sortDirection`
/// switches the response shape from a plain list to a page envelope; `term`
/// alone keeps the plain shape.
///
/// `sortBy` and `sortDirection` are validated against the per-entity
/// allow-lists before any query is built; unrecognized values are rejected
/// rather than silently replaced with defaults.
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Case-insensitive substring filter.
    pub term: Option<String>,
    /// 1-based page number (default 1).
    pub page: Option<i64>,
    /// Items per page (default 10).
    pub page_size: Option<i64>,
    /// Sort column; must be in the entity's allow-list (default `id`).
    pub sort_by: Option<String>,
    /// `asc` or `desc`, case-insensitive (default `asc`).
    pub sort_direction: Option<String>,
}

impl SearchParams {
    /// Default page number when absent.
    const DEFAULT_PAGE: i64 = 1;
    /// Default page size when absent.
    const DEFAULT_PAGE_SIZE: i64 = 10;

    /// Returns the filter term.
    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    /// Returns whether the client asked for a page envelope.
    ///
    /// Any paging or sorting parameter switches the response shape.
    pub fn wants_page(&self) -> bool {
        self.page.is_some()
            || self.page_size.is_some()
            || self.sort_by.is_some()
            || self.sort_direction.is_some()
    }

    /// Validates and resolves the pagination parameters.
    ///
    /// Non-positive values are invalid arguments, not clamped.
    pub fn pagination(&self) -> Result<Pagination> {
        let page = self.page.unwrap_or(Self::DEFAULT_PAGE);
        if page < 1 {
            return Err(ErrorKind::BadRequest
                .with_message("page must be a positive integer")
                .with_context(format!("page: {page}")));
        }

        let page_size = self.page_size.unwrap_or(Self::DEFAULT_PAGE_SIZE);
        if page_size < 1 {
            return Err(ErrorKind::BadRequest
                .with_message("pageSize must be a positive integer")
                .with_context(format!("pageSize: {page_size}")));
        }

        Ok(Pagination::from_page(page, page_size))
    }

    /// Validates and resolves the sort specification against an entity's
    /// allow-listed sort fields.
    pub fn sort<F>(&self) -> Result<SortBy<F>>
    where
        F: FromStr + Default,
    {
        let field = match self.sort_by.as_deref() {
            None => F::default(),
            Some(raw) => raw.parse().map_err(|_| {
                ErrorKind::BadRequest
                    .with_message("Unrecognized sortBy value")
                    .with_context(format!("sortBy: {raw}"))
            })?,
        };

        let order = match self.sort_direction.as_deref() {
            None => SortOrder::default(),
            Some(raw) => raw.parse().map_err(|_| {
                ErrorKind::BadRequest
                    .with_message("sortDirection must be `asc` or `desc`")
                    .with_context(format!("sortDirection: {raw}"))
            })?,
        };

        Ok(SortBy::new(field, order))
    }
}

#[cfg(test)]
mod tests {
    use ladle_postgres::types::{ChefSortField, IngredientSortField};

    use super::*;

    #[test]
    fn absent_params_keep_plain_list_shape() {
        let params = SearchParams::default();
        assert!(!params.wants_page());

        let params = SearchParams {
            term: Some("salt".to_owned()),
            ..Default::default()
        };
        assert!(!params.wants_page());
    }

    #[test]
    fn any_paging_param_switches_to_envelope() {
        for params in [
            SearchParams {
                page: Some(2),
                ..Default::default()
            },
            SearchParams {
                page_size: Some(5),
                ..Default::default()
            },
            SearchParams {
                sort_by: Some("id".to_owned()),
                ..Default::default()
            },
            SearchParams {
                sort_direction: Some("desc".to_owned()),
                ..Default::default()
            },
        ] {
            assert!(params.wants_page(), "params: {params:?}");
        }
    }

    #[test]
    fn defaults_are_first_page_of_ten_sorted_by_id_asc() {
        let params = SearchParams::default();

        let pagination = params.pagination().expect("defaults are valid");
        assert_eq!(pagination.limit, 10);
        assert_eq!(pagination.offset, 0);

        let sort = params.sort::<ChefSortField>().expect("defaults are valid");
        assert_eq!(sort.field, ChefSortField::Id);
        assert!(sort.is_asc());
    }

    #[test]
    fn rejects_non_positive_page_and_size() {
        let params = SearchParams {
            page: Some(0),
            ..Default::default()
        };
        assert!(params.pagination().is_err());

        let params = SearchParams {
            page_size: Some(0),
            ..Default::default()
        };
        assert!(params.pagination().is_err());

        let params = SearchParams {
            page_size: Some(-3),
            ..Default::default()
        };
        assert!(params.pagination().is_err());
    }

    #[test]
    fn rejects_sort_fields_outside_allow_list() {
        let params = SearchParams {
            sort_by: Some("password".to_owned()),
            ..Default::default()
        };
        assert!(params.sort::<ChefSortField>().is_err());

        let params = SearchParams {
            sort_by: Some("id; DROP TABLE chefs".to_owned()),
            ..Default::default()
        };
        assert!(params.sort::<ChefSortField>().is_err());
    }

    #[test]
    fn rejects_unknown_sort_direction() {
        let params = SearchParams {
            sort_direction: Some("sideways".to_owned()),
            ..Default::default()
        };
        assert!(params.sort::<ChefSortField>().is_err());
    }

    #[test]
    fn sort_parsing_is_case_insensitive() {
        let params = SearchParams {
            sort_by: Some("NAME".to_owned()),
            sort_direction: Some("DESC".to_owned()),
            ..Default::default()
        };

        let sort = params.sort::<IngredientSortField>().expect("parses");
        assert_eq!(sort.field, IngredientSortField::Name);
        assert!(sort.is_desc());
    }

    #[test]
    fn deserializes_camel_case_keys() {
        let params: SearchParams =
            serde_json::from_str(r#"{"pageSize": 5, "sortBy": "username", "sortDirection": "desc"}"#)
                .expect("deserializes");

        assert_eq!(params.page_size, Some(5));
        assert_eq!(params.sort_by.as_deref(), Some("username"));
        assert!(params.wants_page());

        let sort = params.sort::<ChefSortField>().expect("parses");
        assert_eq!(sort.field, ChefSortField::Username);
        assert!(sort.is_desc());
    }

    #[test]
    fn twenty_three_rows_page_three_window() {
        // 23 matching rows with page=3, pageSize=10 must request offset 20,
        // leaving room for exactly the 3 trailing rows.
        let params = SearchParams {
            page: Some(3),
            page_size: Some(10),
            ..Default::default()
        };

        let pagination = params.pagination().expect("valid");
        assert_eq!(pagination.offset, 20);
        assert_eq!(pagination.limit, 10);
    }
}
