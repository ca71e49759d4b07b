//! Recipe-ingredient join table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// Recipe-ingredient join table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum RecipeIngredientConstraints {
    // Join table unique constraints
    #[strum(serialize = "recipe_ingredients_pkey")]
    Pkey,

    // Join table referential constraints
    #[strum(serialize = "recipe_ingredients_recipe_id_fkey")]
    RecipeFk,
    #[strum(serialize = "recipe_ingredients_ingredient_id_fkey")]
    IngredientFk,
}

impl RecipeIngredientConstraints {
    /// Creates a new [`RecipeIngredientConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            RecipeIngredientConstraints::Pkey => ConstraintCategory::Uniqueness,

            RecipeIngredientConstraints::RecipeFk | RecipeIngredientConstraints::IngredientFk => {
                ConstraintCategory::Referential
            }
        }
    }
}

impl From<RecipeIngredientConstraints> for String {
    #[inline]
    fn from(val: RecipeIngredientConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for RecipeIngredientConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
