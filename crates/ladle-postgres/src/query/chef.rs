//! Chef repository for managing chef accounts.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::{AsyncConnection, RunQueryDsl};

use super::like_pattern;
use crate::model::{Chef, NewChef, UpdateChef};
use crate::types::{ChefSortBy, ChefSortField, Page, Pagination, SortOrder};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for chef database operations.
///
/// Handles chef lifecycle management including registration lookups,
/// profile updates, and search.
pub trait ChefRepository {
    /// Creates a new chef account.
    ///
    /// Inserts a new chef record with the provided credentials and profile
    /// fields. Duplicate usernames surface as a constraint violation.
    fn create_chef(&mut self, new_chef: NewChef) -> impl Future<Output = PgResult<Chef>> + Send;

    /// Finds a chef by its unique identifier.
    fn find_chef_by_id(&mut self, chef_id: i32)
    -> impl Future<Output = PgResult<Option<Chef>>> + Send;

    /// Finds a chef by exact username.
    ///
    /// Used by login; comparison is exact equality, never a substring match.
    fn find_chef_by_username(
        &mut self,
        username: &str,
    ) -> impl Future<Output = PgResult<Option<Chef>>> + Send;

    /// Updates a chef with partial changes.
    ///
    /// Only fields set to `Some(value)` are modified.
    fn update_chef(
        &mut self,
        chef_id: i32,
        changes: UpdateChef,
    ) -> impl Future<Output = PgResult<Chef>> + Send;

    /// Permanently deletes a chef together with its dependent rows.
    ///
    /// Runs in one transaction: the join rows of the chef's recipes first,
    /// then the recipes, then the chef itself, so an interruption cannot
    /// leave orphaned references.
    fn delete_chef(&mut self, chef_id: i32) -> impl Future<Output = PgResult<()>> + Send;

    /// Lists all chefs ordered by identifier.
    fn list_chefs(&mut self) -> impl Future<Output = PgResult<Vec<Chef>>> + Send;

    /// Searches chefs by a case-insensitive username substring.
    ///
    /// An absent or empty term matches everything.
    fn search_chefs(
        &mut self,
        term: Option<&str>,
    ) -> impl Future<Output = PgResult<Vec<Chef>>> + Send;

    /// Searches chefs with sorting and pagination pushed to the database.
    ///
    /// Returns the requested page together with the total match count; a
    /// page past the end of the result set is empty, not an error.
    fn search_chefs_paged(
        &mut self,
        term: Option<&str>,
        sort: ChefSortBy,
        pagination: Pagination,
    ) -> impl Future<Output = PgResult<Page<Chef>>> + Send;
}

impl ChefRepository for PgConnection {
    async fn create_chef(&mut self, new_chef: NewChef) -> PgResult<Chef> {
        use schema::chefs;

        diesel::insert_into(chefs::table)
            .values(&new_chef)
            .returning(Chef::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn find_chef_by_id(&mut self, chef_id: i32) -> PgResult<Option<Chef>> {
        use schema::chefs::{self, dsl};

        chefs::table
            .filter(dsl::id.eq(chef_id))
            .select(Chef::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn find_chef_by_username(&mut self, username: &str) -> PgResult<Option<Chef>> {
        use schema::chefs::{self, dsl};

        chefs::table
            .filter(dsl::username.eq(username))
            .select(Chef::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn update_chef(&mut self, chef_id: i32, changes: UpdateChef) -> PgResult<Chef> {
        use schema::chefs::{self, dsl};

        diesel::update(chefs::table.filter(dsl::id.eq(chef_id)))
            .set((&changes, dsl::updated_at.eq(diesel::dsl::now)))
            .returning(Chef::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn delete_chef(&mut self, chef_id: i32) -> PgResult<()> {
        use schema::{chefs, recipe_ingredients, recipes};

        self.transaction(|conn| {
            Box::pin(async move {
                let owned_recipes = recipes::table
                    .filter(recipes::chef_id.eq(chef_id))
                    .select(recipes::id);

                diesel::delete(
                    recipe_ingredients::table
                        .filter(recipe_ingredients::recipe_id.eq_any(owned_recipes)),
                )
                .execute(conn)
                .await?;

                diesel::delete(recipes::table.filter(recipes::chef_id.eq(chef_id)))
                    .execute(conn)
                    .await?;

                diesel::delete(chefs::table.filter(chefs::id.eq(chef_id)))
                    .execute(conn)
                    .await?;

                Ok::<_, PgError>(())
            })
        })
        .await
    }

    async fn list_chefs(&mut self) -> PgResult<Vec<Chef>> {
        use schema::chefs::{self, dsl};

        chefs::table
            .select(Chef::as_select())
            .order(dsl::id.asc())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn search_chefs(&mut self, term: Option<&str>) -> PgResult<Vec<Chef>> {
        use schema::chefs::{self, dsl};

        let pattern = like_pattern(term);

        chefs::table
            .filter(dsl::username.ilike(&pattern))
            .select(Chef::as_select())
            .order(dsl::id.asc())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn search_chefs_paged(
        &mut self,
        term: Option<&str>,
        sort: ChefSortBy,
        pagination: Pagination,
    ) -> PgResult<Page<Chef>> {
        use schema::chefs::{self, dsl};

        let pattern = like_pattern(term);

        let total: i64 = chefs::table
            .filter(dsl::username.ilike(&pattern))
            .count()
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        let query = chefs::table
            .filter(dsl::username.ilike(&pattern))
            .into_boxed();

        let query = match (sort.field, sort.order) {
            (ChefSortField::Id, SortOrder::Asc) => query.order(dsl::id.asc()),
            (ChefSortField::Id, SortOrder::Desc) => query.order(dsl::id.desc()),
            (ChefSortField::Username, SortOrder::Asc) => query.order(dsl::username.asc()),
            (ChefSortField::Username, SortOrder::Desc) => query.order(dsl::username.desc()),
            (ChefSortField::Email, SortOrder::Asc) => query.order(dsl::email.asc()),
            (ChefSortField::Email, SortOrder::Desc) => query.order(dsl::email.desc()),
        };

        let items = query
            .select(Chef::as_select())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(Page::new(pagination, total, items))
    }
}
