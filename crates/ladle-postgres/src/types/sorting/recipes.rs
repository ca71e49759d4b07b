//! Sorting options for recipe queries.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::EnumString;

use super::SortBy;

/// Fields available for sorting recipes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RecipeSortField {
    /// Sort by recipe identifier.
    #[default]
    Id,
    /// Sort by recipe name.
    Name,
}

/// Sorting specification for recipes.
pub type RecipeSortBy = SortBy<RecipeSortField>;
