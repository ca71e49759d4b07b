//! Recipe-ingredient association repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::model::{Ingredient, NewRecipeIngredient};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for the recipe-to-ingredient join table.
pub trait RecipeIngredientRepository {
    /// Links an ingredient to a recipe.
    ///
    /// Linking an already-linked pair is a no-op rather than an error.
    fn link_ingredient(
        &mut self,
        link: NewRecipeIngredient,
    ) -> impl Future<Output = PgResult<()>> + Send;

    /// Removes the link between a recipe and an ingredient.
    ///
    /// Returns whether a link existed.
    fn unlink_ingredient(
        &mut self,
        recipe_id: i32,
        ingredient_id: i32,
    ) -> impl Future<Output = PgResult<bool>> + Send;

    /// Lists the ingredients linked to a recipe, ordered by identifier.
    fn list_recipe_ingredients(
        &mut self,
        recipe_id: i32,
    ) -> impl Future<Output = PgResult<Vec<Ingredient>>> + Send;
}

impl RecipeIngredientRepository for PgConnection {
    async fn link_ingredient(&mut self, link: NewRecipeIngredient) -> PgResult<()> {
        use schema::recipe_ingredients;

        diesel::insert_into(recipe_ingredients::table)
            .values(&link)
            .on_conflict_do_nothing()
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(())
    }

    async fn unlink_ingredient(&mut self, recipe_id: i32, ingredient_id: i32) -> PgResult<bool> {
        use schema::recipe_ingredients::{self, dsl};

        let deleted = diesel::delete(
            recipe_ingredients::table
                .filter(dsl::recipe_id.eq(recipe_id))
                .filter(dsl::ingredient_id.eq(ingredient_id)),
        )
        .execute(self)
        .await
        .map_err(PgError::from)?;

        Ok(deleted > 0)
    }

    async fn list_recipe_ingredients(&mut self, recipe_id: i32) -> PgResult<Vec<Ingredient>> {
        use schema::{ingredients, recipe_ingredients};

        recipe_ingredients::table
            .inner_join(ingredients::table)
            .filter(recipe_ingredients::recipe_id.eq(recipe_id))
            .select(Ingredient::as_select())
            .order(ingredients::id.asc())
            .load(self)
            .await
            .map_err(PgError::from)
    }
}
