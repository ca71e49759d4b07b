//! Sorting options for ingredient queries.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::EnumString;

use super::SortBy;

/// Fields available for sorting ingredients.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum IngredientSortField {
    /// Sort by ingredient identifier.
    #[default]
    Id,
    /// Sort by ingredient name.
    Name,
}

/// Sorting specification for ingredients.
pub type IngredientSortBy = SortBy<IngredientSortField>;
