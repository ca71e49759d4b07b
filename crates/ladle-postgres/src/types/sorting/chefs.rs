//! Sorting options for chef queries.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::EnumString;

use super::SortBy;

/// Fields available for sorting chefs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ChefSortField {
    /// Sort by chef identifier.
    #[default]
    Id,
    /// Sort by username.
    Username,
    /// Sort by email address.
    Email,
}

/// Sorting specification for chefs.
pub type ChefSortBy = SortBy<ChefSortField>;
