//! Ingredients table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// Ingredients table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum IngredientConstraints {
    // Ingredient validation constraints
    #[strum(serialize = "ingredients_name_not_empty")]
    NameNotEmpty,
}

impl IngredientConstraints {
    /// Creates a new [`IngredientConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            IngredientConstraints::NameNotEmpty => ConstraintCategory::Validation,
        }
    }
}

impl From<IngredientConstraints> for String {
    #[inline]
    fn from(val: IngredientConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for IngredientConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
