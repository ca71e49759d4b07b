//! Recipe-to-ingredient association model.

use diesel::prelude::*;

use crate::schema::recipe_ingredients;

/// Association row linking a recipe to one of its ingredients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = recipe_ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecipeIngredient {
    /// Identifier of the recipe.
    pub recipe_id: i32,
    /// Identifier of the ingredient.
    pub ingredient_id: i32,
}

/// Data for linking an ingredient to a recipe.
#[derive(Debug, Default, Clone, Copy, Insertable)]
#[diesel(table_name = recipe_ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewRecipeIngredient {
    /// Identifier of the recipe.
    pub recipe_id: i32,
    /// Identifier of the ingredient.
    pub ingredient_id: i32,
}
