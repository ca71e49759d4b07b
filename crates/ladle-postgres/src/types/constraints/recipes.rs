//! Recipes table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// Recipes table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum RecipeConstraints {
    // Recipe validation constraints
    #[strum(serialize = "recipes_name_not_empty")]
    NameNotEmpty,

    // Recipe referential constraints
    #[strum(serialize = "recipes_chef_id_fkey")]
    ChefFk,
}

impl RecipeConstraints {
    /// Creates a new [`RecipeConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            RecipeConstraints::NameNotEmpty => ConstraintCategory::Validation,
            RecipeConstraints::ChefFk => ConstraintCategory::Referential,
        }
    }
}

impl From<RecipeConstraints> for String {
    #[inline]
    fn from(val: RecipeConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for RecipeConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
