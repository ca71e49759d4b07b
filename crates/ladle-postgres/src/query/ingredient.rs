//! Ingredient repository for managing ingredient records.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::{AsyncConnection, RunQueryDsl};

use super::like_pattern;
use crate::model::{Ingredient, NewIngredient, UpdateIngredient};
use crate::types::{IngredientSortBy, IngredientSortField, Page, Pagination, SortOrder};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for ingredient database operations.
pub trait IngredientRepository {
    /// Creates a new ingredient.
    fn create_ingredient(
        &mut self,
        new_ingredient: NewIngredient,
    ) -> impl Future<Output = PgResult<Ingredient>> + Send;

    /// Finds an ingredient by its unique identifier.
    fn find_ingredient_by_id(
        &mut self,
        ingredient_id: i32,
    ) -> impl Future<Output = PgResult<Option<Ingredient>>> + Send;

    /// Updates an ingredient with partial changes.
    fn update_ingredient(
        &mut self,
        ingredient_id: i32,
        changes: UpdateIngredient,
    ) -> impl Future<Output = PgResult<Ingredient>> + Send;

    /// Permanently deletes an ingredient together with its join rows.
    ///
    /// Runs in one transaction: rows in `recipe_ingredients` referencing the
    /// ingredient are removed before the ingredient row itself, so no recipe
    /// is left pointing at a missing ingredient.
    fn delete_ingredient(&mut self, ingredient_id: i32)
    -> impl Future<Output = PgResult<()>> + Send;

    /// Lists all ingredients ordered by identifier.
    fn list_ingredients(&mut self) -> impl Future<Output = PgResult<Vec<Ingredient>>> + Send;

    /// Searches ingredients by a case-insensitive name substring.
    ///
    /// An absent or empty term matches everything.
    fn search_ingredients(
        &mut self,
        term: Option<&str>,
    ) -> impl Future<Output = PgResult<Vec<Ingredient>>> + Send;

    /// Searches ingredients with sorting and pagination pushed to the database.
    fn search_ingredients_paged(
        &mut self,
        term: Option<&str>,
        sort: IngredientSortBy,
        pagination: Pagination,
    ) -> impl Future<Output = PgResult<Page<Ingredient>>> + Send;
}

impl IngredientRepository for PgConnection {
    async fn create_ingredient(&mut self, new_ingredient: NewIngredient) -> PgResult<Ingredient> {
        use schema::ingredients;

        diesel::insert_into(ingredients::table)
            .values(&new_ingredient)
            .returning(Ingredient::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn find_ingredient_by_id(&mut self, ingredient_id: i32) -> PgResult<Option<Ingredient>> {
        use schema::ingredients::{self, dsl};

        ingredients::table
            .filter(dsl::id.eq(ingredient_id))
            .select(Ingredient::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn update_ingredient(
        &mut self,
        ingredient_id: i32,
        changes: UpdateIngredient,
    ) -> PgResult<Ingredient> {
        use schema::ingredients::{self, dsl};

        diesel::update(ingredients::table.filter(dsl::id.eq(ingredient_id)))
            .set((&changes, dsl::updated_at.eq(diesel::dsl::now)))
            .returning(Ingredient::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn delete_ingredient(&mut self, ingredient_id: i32) -> PgResult<()> {
        use schema::{ingredients, recipe_ingredients};

        self.transaction(|conn| {
            Box::pin(async move {
                diesel::delete(
                    recipe_ingredients::table
                        .filter(recipe_ingredients::ingredient_id.eq(ingredient_id)),
                )
                .execute(conn)
                .await?;

                diesel::delete(ingredients::table.filter(ingredients::id.eq(ingredient_id)))
                    .execute(conn)
                    .await?;

                Ok::<_, PgError>(())
            })
        })
        .await
    }

    async fn list_ingredients(&mut self) -> PgResult<Vec<Ingredient>> {
        use schema::ingredients::{self, dsl};

        ingredients::table
            .select(Ingredient::as_select())
            .order(dsl::id.asc())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn search_ingredients(&mut self, term: Option<&str>) -> PgResult<Vec<Ingredient>> {
        use schema::ingredients::{self, dsl};

        let pattern = like_pattern(term);

        ingredients::table
            .filter(dsl::name.ilike(&pattern))
            .select(Ingredient::as_select())
            .order(dsl::id.asc())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn search_ingredients_paged(
        &mut self,
        term: Option<&str>,
        sort: IngredientSortBy,
        pagination: Pagination,
    ) -> PgResult<Page<Ingredient>> {
        use schema::ingredients::{self, dsl};

        let pattern = like_pattern(term);

        let total: i64 = ingredients::table
            .filter(dsl::name.ilike(&pattern))
            .count()
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        let query = ingredients::table
            .filter(dsl::name.ilike(&pattern))
            .into_boxed();

        let query = match (sort.field, sort.order) {
            (IngredientSortField::Id, SortOrder::Asc) => query.order(dsl::id.asc()),
            (IngredientSortField::Id, SortOrder::Desc) => query.order(dsl::id.desc()),
            (IngredientSortField::Name, SortOrder::Asc) => query.order(dsl::name.asc()),
            (IngredientSortField::Name, SortOrder::Desc) => query.order(dsl::name.desc()),
        };

        let items = query
            .select(Ingredient::as_select())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(Page::new(pagination, total, items))
    }
}
