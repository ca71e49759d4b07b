//! Recipe repository for managing recipes and their authors.
//!
//! Every read resolves the authoring chef through an inner join, so the
//! author arrives as a full model and the extra lookup cost stays visible
//! in the repository signature rather than hiding behind lazy loading.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::{AsyncConnection, RunQueryDsl};

use super::like_pattern;
use crate::model::{Chef, NewRecipe, Recipe, UpdateRecipe};
use crate::types::{Page, Pagination, RecipeSortBy, RecipeSortField, SortOrder};
use crate::{PgConnection, PgError, PgResult, schema};

/// A recipe row paired with its resolved author.
pub type RecipeWithAuthor = (Recipe, Chef);

/// Repository for recipe database operations.
pub trait RecipeRepository {
    /// Creates a new recipe.
    ///
    /// The authoring chef must exist; a missing author surfaces as a
    /// foreign-key constraint violation.
    fn create_recipe(
        &mut self,
        new_recipe: NewRecipe,
    ) -> impl Future<Output = PgResult<Recipe>> + Send;

    /// Finds a recipe by its unique identifier, author included.
    fn find_recipe_by_id(
        &mut self,
        recipe_id: i32,
    ) -> impl Future<Output = PgResult<Option<RecipeWithAuthor>>> + Send;

    /// Updates a recipe with partial changes.
    fn update_recipe(
        &mut self,
        recipe_id: i32,
        changes: UpdateRecipe,
    ) -> impl Future<Output = PgResult<Recipe>> + Send;

    /// Permanently deletes a recipe together with its join rows.
    ///
    /// Runs in one transaction: rows in `recipe_ingredients` referencing
    /// the recipe are removed before the recipe row itself.
    fn delete_recipe(&mut self, recipe_id: i32) -> impl Future<Output = PgResult<()>> + Send;

    /// Lists all recipes with their authors, ordered by identifier.
    fn list_recipes(&mut self) -> impl Future<Output = PgResult<Vec<RecipeWithAuthor>>> + Send;

    /// Searches recipes by a case-insensitive name substring.
    ///
    /// An absent or empty term matches everything.
    fn search_recipes(
        &mut self,
        term: Option<&str>,
    ) -> impl Future<Output = PgResult<Vec<RecipeWithAuthor>>> + Send;

    /// Searches recipes with sorting and pagination pushed to the database.
    fn search_recipes_paged(
        &mut self,
        term: Option<&str>,
        sort: RecipeSortBy,
        pagination: Pagination,
    ) -> impl Future<Output = PgResult<Page<RecipeWithAuthor>>> + Send;
}

impl RecipeRepository for PgConnection {
    async fn create_recipe(&mut self, new_recipe: NewRecipe) -> PgResult<Recipe> {
        use schema::recipes;

        diesel::insert_into(recipes::table)
            .values(&new_recipe)
            .returning(Recipe::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn find_recipe_by_id(&mut self, recipe_id: i32) -> PgResult<Option<RecipeWithAuthor>> {
        use schema::{chefs, recipes};

        recipes::table
            .inner_join(chefs::table)
            .filter(recipes::id.eq(recipe_id))
            .select((Recipe::as_select(), Chef::as_select()))
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn update_recipe(&mut self, recipe_id: i32, changes: UpdateRecipe) -> PgResult<Recipe> {
        use schema::recipes::{self, dsl};

        diesel::update(recipes::table.filter(dsl::id.eq(recipe_id)))
            .set((&changes, dsl::updated_at.eq(diesel::dsl::now)))
            .returning(Recipe::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn delete_recipe(&mut self, recipe_id: i32) -> PgResult<()> {
        use schema::{recipe_ingredients, recipes};

        self.transaction(|conn| {
            Box::pin(async move {
                diesel::delete(
                    recipe_ingredients::table
                        .filter(recipe_ingredients::recipe_id.eq(recipe_id)),
                )
                .execute(conn)
                .await?;

                diesel::delete(recipes::table.filter(recipes::id.eq(recipe_id)))
                    .execute(conn)
                    .await?;

                Ok::<_, PgError>(())
            })
        })
        .await
    }

    async fn list_recipes(&mut self) -> PgResult<Vec<RecipeWithAuthor>> {
        use schema::{chefs, recipes};

        recipes::table
            .inner_join(chefs::table)
            .select((Recipe::as_select(), Chef::as_select()))
            .order(recipes::id.asc())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn search_recipes(&mut self, term: Option<&str>) -> PgResult<Vec<RecipeWithAuthor>> {
        use schema::{chefs, recipes};

        let pattern = like_pattern(term);

        recipes::table
            .inner_join(chefs::table)
            .filter(recipes::name.ilike(&pattern))
            .select((Recipe::as_select(), Chef::as_select()))
            .order(recipes::id.asc())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn search_recipes_paged(
        &mut self,
        term: Option<&str>,
        sort: RecipeSortBy,
        pagination: Pagination,
    ) -> PgResult<Page<RecipeWithAuthor>> {
        use schema::{chefs, recipes};

        let pattern = like_pattern(term);

        let total: i64 = recipes::table
            .filter(recipes::name.ilike(&pattern))
            .count()
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        let query = recipes::table
            .inner_join(chefs::table)
            .filter(recipes::name.ilike(&pattern))
            .into_boxed();

        let query = match (sort.field, sort.order) {
            (RecipeSortField::Id, SortOrder::Asc) => query.order(recipes::id.asc()),
            (RecipeSortField::Id, SortOrder::Desc) => query.order(recipes::id.desc()),
            (RecipeSortField::Name, SortOrder::Asc) => query.order(recipes::name.asc()),
            (RecipeSortField::Name, SortOrder::Desc) => query.order(recipes::name.desc()),
        };

        let items = query
            .select((Recipe::as_select(), Chef::as_select()))
            .limit(pagination.limit)
            .offset(pagination.offset)
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(Page::new(pagination, total, items))
    }
}
