//! Typed path parameters.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Path parameters identifying a chef.
#[must_use]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct ChefPathParams {
    /// Identifier of the chef.
    pub chef_id: i32,
}

/// Path parameters identifying an ingredient.
#[must_use]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct IngredientPathParams {
    /// Identifier of the ingredient.
    pub ingredient_id: i32,
}

/// Path parameters identifying a recipe.
#[must_use]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct RecipePathParams {
    /// Identifier of the recipe.
    pub recipe_id: i32,
}

/// Path parameters identifying a recipe-ingredient link.
#[must_use]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct RecipeIngredientPathParams {
    /// Identifier of the recipe.
    pub recipe_id: i32,
    /// Identifier of the ingredient.
    pub ingredient_id: i32,
}
