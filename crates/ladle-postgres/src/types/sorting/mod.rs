//! Sorting options for database queries.
//!
//! Sort columns are expressed as per-entity enums rather than raw strings,
//! so only allow-listed fields can ever reach query construction.

mod chefs;
mod ingredients;
mod recipes;

pub use chefs::{ChefSortBy, ChefSortField};
pub use ingredients::{IngredientSortBy, IngredientSortField};
pub use recipes::{RecipeSortBy, RecipeSortField};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::EnumString;

/// Sort order direction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SortOrder {
    /// Ascending order (A-Z, oldest first, smallest first).
    #[default]
    Asc,
    /// Descending order (Z-A, newest first, largest first).
    Desc,
}

/// Generic sort specification with field and order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SortBy<F> {
    /// The field to sort by.
    pub field: F,
    /// The sort order direction.
    #[serde(default)]
    pub order: SortOrder,
}

impl<F: Default> Default for SortBy<F> {
    fn default() -> Self {
        Self {
            field: F::default(),
            order: SortOrder::default(),
        }
    }
}

impl<F> SortBy<F> {
    /// Creates a new sort specification with the given field and order.
    #[inline]
    pub fn new(field: F, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Creates a new sort specification with ascending order.
    #[inline]
    pub fn asc(field: F) -> Self {
        Self {
            field,
            order: SortOrder::Asc,
        }
    }

    /// Creates a new sort specification with descending order.
    #[inline]
    pub fn desc(field: F) -> Self {
        Self {
            field,
            order: SortOrder::Desc,
        }
    }

    /// Returns whether the sort order is ascending.
    #[inline]
    pub fn is_asc(&self) -> bool {
        matches!(self.order, SortOrder::Asc)
    }

    /// Returns whether the sort order is descending.
    #[inline]
    pub fn is_desc(&self) -> bool {
        matches!(self.order, SortOrder::Desc)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn sort_order_parses_case_insensitive() {
        assert_eq!(SortOrder::from_str("asc"), Ok(SortOrder::Asc));
        assert_eq!(SortOrder::from_str("ASC"), Ok(SortOrder::Asc));
        assert_eq!(SortOrder::from_str("Desc"), Ok(SortOrder::Desc));
        assert_eq!(SortOrder::from_str("DESC"), Ok(SortOrder::Desc));
    }

    #[test]
    fn sort_order_rejects_unknown_values() {
        assert!(SortOrder::from_str("upwards").is_err());
        assert!(SortOrder::from_str("").is_err());
        assert!(SortOrder::from_str("ascending").is_err());
    }

    #[test]
    fn sort_order_defaults_to_asc() {
        assert_eq!(SortOrder::default(), SortOrder::Asc);
    }

    #[test]
    fn sort_by_constructors() {
        let sort = ChefSortBy::asc(ChefSortField::Username);
        assert!(sort.is_asc());
        assert_eq!(sort.field, ChefSortField::Username);

        let sort = ChefSortBy::desc(ChefSortField::Id);
        assert!(sort.is_desc());
    }

    #[test]
    fn sort_fields_parse_only_allow_listed_columns() {
        assert_eq!(ChefSortField::from_str("username"), Ok(ChefSortField::Username));
        assert_eq!(ChefSortField::from_str("EMAIL"), Ok(ChefSortField::Email));
        assert_eq!(ChefSortField::from_str("id"), Ok(ChefSortField::Id));
        // Columns outside the allow-list never parse, even real ones.
        assert!(ChefSortField::from_str("password").is_err());
        assert!(ChefSortField::from_str("is_admin").is_err());
        assert!(ChefSortField::from_str("id; DROP TABLE chefs").is_err());

        assert_eq!(IngredientSortField::from_str("name"), Ok(IngredientSortField::Name));
        assert!(IngredientSortField::from_str("created_at").is_err());

        assert_eq!(RecipeSortField::from_str("Name"), Ok(RecipeSortField::Name));
        assert!(RecipeSortField::from_str("chef_id").is_err());
    }

    #[test]
    fn sort_fields_default_to_id() {
        assert_eq!(ChefSortField::default(), ChefSortField::Id);
        assert_eq!(IngredientSortField::default(), IngredientSortField::Id);
        assert_eq!(RecipeSortField::default(), RecipeSortField::Id);
    }
}
