//! Recipe management handlers for CRUD, search, and ingredient links.
//!
//! Every recipe read resolves the authoring chef, so responses always carry
//! the full author rather than a bare id.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::http::StatusCode;
use ladle_postgres::model::NewRecipeIngredient;
use ladle_postgres::query::{ChefRepository, RecipeIngredientRepository, RecipeRepository};
use ladle_postgres::types::RecipeSortField;

use crate::extract::{Json, Path, PgPool, Query, ValidateJson};
use crate::handler::request::{
    CreateRecipe, RecipeIngredientPathParams, RecipePathParams, SearchParams, UpdateRecipe,
};
use crate::handler::response::{ErrorResponse, Ingredient, Listing, Recipe};
use crate::handler::{Error, ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for recipe operations.
const TRACING_TARGET: &str = "ladle_server::handler::recipes";

/// Returns the standard not-found error for a recipe id.
fn recipe_not_found(recipe_id: i32) -> Error<'static> {
    ErrorKind::NotFound
        .with_message(format!("Recipe not found: {recipe_id}"))
        .with_resource("recipe")
}

/// Creates a new recipe.
///
/// The authoring chef is resolved first, both to fail clearly when it is
/// missing and to return the full author in the response.
#[tracing::instrument(skip_all)]
async fn create_recipe(
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<CreateRecipe>,
) -> Result<(StatusCode, Json<Recipe>)> {
    tracing::debug!(target: TRACING_TARGET, "Creating recipe");

    let Some(author) = conn.find_chef_by_id(request.chef_id).await? else {
        return Err(ErrorKind::NotFound
            .with_message(format!("Chef not found: {}", request.chef_id))
            .with_resource("chef"));
    };

    let recipe = conn.create_recipe(request.into_model()).await?;

    tracing::info!(target: TRACING_TARGET, recipe_id = recipe.id, "Recipe created");

    Ok((StatusCode::CREATED, Json(Recipe::from_parts(recipe, author))))
}

fn create_recipe_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create recipe")
        .description("Creates a new recipe. The authoring chef must exist.")
        .response::<201, Json<Recipe>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Lists or searches recipes.
///
/// Without paging parameters the full filtered list is returned as a plain
/// array; any of `page`, `pageSize`, `sortBy`, `sortDirection` switches the
/// response to a page envelope.
#[tracing::instrument(skip_all)]
async fn list_recipes(
    PgPool(mut conn): PgPool,
    Query(params): Query<SearchParams>,
) -> Result<Listing<Recipe>> {
    if params.wants_page() {
        let sort = params.sort::<RecipeSortField>()?;
        let pagination = params.pagination()?;

        let page = conn
            .search_recipes_paged(params.term(), sort, pagination)
            .await?;

        tracing::debug!(
            target: TRACING_TARGET,
            total = page.total_elements,
            page = page.page_number,
            "Recipes page listed",
        );

        return Ok(Listing::paged(page.map(Recipe::from_model)));
    }

    let recipes = conn.search_recipes(params.term()).await?;

    tracing::debug!(target: TRACING_TARGET, count = recipes.len(), "Recipes listed");

    Ok(Listing::plain(recipes.into_iter().map(Recipe::from_model).collect()))
}

fn list_recipes_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List recipes")
        .description(
            "Lists recipes with their authors, filtered by an optional \
             case-insensitive name substring. Paging or sorting parameters \
             switch the response from a plain array to a page envelope.",
        )
        .response::<200, Json<Vec<Recipe>>>()
        .response::<400, Json<ErrorResponse>>()
}

/// Retrieves a single recipe by id, author included.
#[tracing::instrument(skip_all, fields(recipe_id = path_params.recipe_id))]
async fn read_recipe(
    PgPool(mut conn): PgPool,
    Path(path_params): Path<RecipePathParams>,
) -> Result<(StatusCode, Json<Recipe>)> {
    let Some(recipe) = conn.find_recipe_by_id(path_params.recipe_id).await? else {
        return Err(recipe_not_found(path_params.recipe_id));
    };

    Ok((StatusCode::OK, Json(Recipe::from_model(recipe))))
}

fn read_recipe_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get recipe")
        .description("Returns a single recipe by id, author included.")
        .response::<200, Json<Recipe>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Updates an existing recipe. Only provided fields are updated.
#[tracing::instrument(skip_all, fields(recipe_id = path_params.recipe_id))]
async fn update_recipe(
    PgPool(mut conn): PgPool,
    Path(path_params): Path<RecipePathParams>,
    ValidateJson(request): ValidateJson<UpdateRecipe>,
) -> Result<(StatusCode, Json<Recipe>)> {
    tracing::debug!(target: TRACING_TARGET, "Updating recipe");

    if conn.find_recipe_by_id(path_params.recipe_id).await?.is_none() {
        return Err(recipe_not_found(path_params.recipe_id));
    }

    if let Some(chef_id) = request.chef_id
        && conn.find_chef_by_id(chef_id).await?.is_none()
    {
        return Err(ErrorKind::NotFound
            .with_message(format!("Chef not found: {chef_id}"))
            .with_resource("chef"));
    }

    conn.update_recipe(path_params.recipe_id, request.into_model())
        .await?;

    // Re-read through the join so the response carries the (possibly new)
    // author in full.
    let Some(recipe) = conn.find_recipe_by_id(path_params.recipe_id).await? else {
        return Err(recipe_not_found(path_params.recipe_id));
    };

    tracing::info!(target: TRACING_TARGET, "Recipe updated");

    Ok((StatusCode::OK, Json(Recipe::from_model(recipe))))
}

fn update_recipe_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Update recipe")
        .description("Updates an existing recipe. Only provided fields are updated.")
        .response::<200, Json<Recipe>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Deletes a recipe.
///
/// Join rows referencing the recipe are removed in the same transaction.
#[tracing::instrument(skip_all, fields(recipe_id = path_params.recipe_id))]
async fn delete_recipe(
    PgPool(mut conn): PgPool,
    Path(path_params): Path<RecipePathParams>,
) -> Result<StatusCode> {
    tracing::debug!(target: TRACING_TARGET, "Deleting recipe");

    if conn.find_recipe_by_id(path_params.recipe_id).await?.is_none() {
        return Err(recipe_not_found(path_params.recipe_id));
    }

    conn.delete_recipe(path_params.recipe_id).await?;

    tracing::info!(target: TRACING_TARGET, "Recipe deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn delete_recipe_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete recipe")
        .description("Deletes a recipe together with its ingredient join rows.")
        .response::<204, ()>()
        .response::<404, Json<ErrorResponse>>()
}

/// Lists the ingredients linked to a recipe.
#[tracing::instrument(skip_all, fields(recipe_id = path_params.recipe_id))]
async fn list_recipe_ingredients(
    PgPool(mut conn): PgPool,
    Path(path_params): Path<RecipePathParams>,
) -> Result<(StatusCode, Json<Vec<Ingredient>>)> {
    if conn.find_recipe_by_id(path_params.recipe_id).await?.is_none() {
        return Err(recipe_not_found(path_params.recipe_id));
    }

    let ingredients = conn.list_recipe_ingredients(path_params.recipe_id).await?;
    let ingredients: Vec<Ingredient> = ingredients
        .into_iter()
        .map(Ingredient::from_model)
        .collect();

    Ok((StatusCode::OK, Json(ingredients)))
}

fn list_recipe_ingredients_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List recipe ingredients")
        .description("Returns the ingredients linked to a recipe.")
        .response::<200, Json<Vec<Ingredient>>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Links an ingredient to a recipe.
///
/// Linking an already-linked pair is a no-op success; a missing recipe or
/// ingredient maps to 404 through the foreign-key constraints.
#[tracing::instrument(
    skip_all,
    fields(
        recipe_id = path_params.recipe_id,
        ingredient_id = path_params.ingredient_id,
    )
)]
async fn link_ingredient(
    PgPool(mut conn): PgPool,
    Path(path_params): Path<RecipeIngredientPathParams>,
) -> Result<StatusCode> {
    let link = NewRecipeIngredient {
        recipe_id: path_params.recipe_id,
        ingredient_id: path_params.ingredient_id,
    };
    conn.link_ingredient(link).await?;

    tracing::info!(target: TRACING_TARGET, "Ingredient linked");

    Ok(StatusCode::NO_CONTENT)
}

fn link_ingredient_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Link ingredient")
        .description("Links an ingredient to a recipe. Linking twice is a no-op.")
        .response::<204, ()>()
        .response::<404, Json<ErrorResponse>>()
}

/// Removes the link between a recipe and an ingredient.
#[tracing::instrument(
    skip_all,
    fields(
        recipe_id = path_params.recipe_id,
        ingredient_id = path_params.ingredient_id,
    )
)]
async fn unlink_ingredient(
    PgPool(mut conn): PgPool,
    Path(path_params): Path<RecipeIngredientPathParams>,
) -> Result<StatusCode> {
    let removed = conn
        .unlink_ingredient(path_params.recipe_id, path_params.ingredient_id)
        .await?;

    if !removed {
        return Err(ErrorKind::NotFound
            .with_message("Ingredient is not linked to this recipe")
            .with_resource("recipe_ingredient"));
    }

    tracing::info!(target: TRACING_TARGET, "Ingredient unlinked");

    Ok(StatusCode::NO_CONTENT)
}

fn unlink_ingredient_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Unlink ingredient")
        .description("Removes the link between a recipe and an ingredient.")
        .response::<204, ()>()
        .response::<404, Json<ErrorResponse>>()
}

/// Returns a [`Router`] with all recipe-related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::{get_with, post_with, put_with};

    ApiRouter::new()
        .api_route(
            "/recipes",
            post_with(create_recipe, create_recipe_docs).get_with(list_recipes, list_recipes_docs),
        )
        .api_route(
            "/recipes/{recipe_id}",
            get_with(read_recipe, read_recipe_docs)
                .put_with(update_recipe, update_recipe_docs)
                .delete_with(delete_recipe, delete_recipe_docs),
        )
        .api_route(
            "/recipes/{recipe_id}/ingredients",
            get_with(list_recipe_ingredients, list_recipe_ingredients_docs),
        )
        .api_route(
            "/recipes/{recipe_id}/ingredients/{ingredient_id}",
            put_with(link_ingredient, link_ingredient_docs)
                .delete_with(unlink_ingredient, unlink_ingredient_docs),
        )
}
