//! Ingredient management handlers for CRUD and search operations.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::http::StatusCode;
use ladle_postgres::query::IngredientRepository;
use ladle_postgres::types::IngredientSortField;

use crate::extract::{Json, Path, PgPool, Query, ValidateJson};
use crate::handler::request::{CreateIngredient, IngredientPathParams, SearchParams, UpdateIngredient};
use crate::handler::response::{ErrorResponse, Ingredient, Listing};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for ingredient operations.
const TRACING_TARGET: &str = "ladle_server::handler::ingredients";

/// Creates a new ingredient.
#[tracing::instrument(skip_all)]
async fn create_ingredient(
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<CreateIngredient>,
) -> Result<(StatusCode, Json<Ingredient>)> {
    tracing::debug!(target: TRACING_TARGET, "Creating ingredient");

    let ingredient = conn.create_ingredient(request.into_model()).await?;

    tracing::info!(
        target: TRACING_TARGET,
        ingredient_id = ingredient.id,
        "Ingredient created",
    );

    Ok((StatusCode::CREATED, Json(Ingredient::from_model(ingredient))))
}

fn create_ingredient_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create ingredient")
        .description("Creates a new ingredient.")
        .response::<201, Json<Ingredient>>()
        .response::<400, Json<ErrorResponse>>()
}

/// Lists or searches ingredients.
///
/// Without paging parameters the full filtered list is returned as a plain
/// array; any of `page`, `pageSize`, `sortBy`, `sortDirection` switches the
/// response to a page envelope.
#[tracing::instrument(skip_all)]
async fn list_ingredients(
    PgPool(mut conn): PgPool,
    Query(params): Query<SearchParams>,
) -> Result<Listing<Ingredient>> {
    if params.wants_page() {
        let sort = params.sort::<IngredientSortField>()?;
        let pagination = params.pagination()?;

        let page = conn
            .search_ingredients_paged(params.term(), sort, pagination)
            .await?;

        tracing::debug!(
            target: TRACING_TARGET,
            total = page.total_elements,
            page = page.page_number,
            "Ingredients page listed",
        );

        return Ok(Listing::paged(page.map(Ingredient::from_model)));
    }

    let ingredients = conn.search_ingredients(params.term()).await?;

    tracing::debug!(target: TRACING_TARGET, count = ingredients.len(), "Ingredients listed");

    Ok(Listing::plain(
        ingredients.into_iter().map(Ingredient::from_model).collect(),
    ))
}

fn list_ingredients_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List ingredients")
        .description(
            "Lists ingredients, filtered by an optional case-insensitive name \
             substring. Paging or sorting parameters switch the response from \
             a plain array to a page envelope.",
        )
        .response::<200, Json<Vec<Ingredient>>>()
        .response::<400, Json<ErrorResponse>>()
}

/// Retrieves a single ingredient by id.
#[tracing::instrument(skip_all, fields(ingredient_id = path_params.ingredient_id))]
async fn read_ingredient(
    PgPool(mut conn): PgPool,
    Path(path_params): Path<IngredientPathParams>,
) -> Result<(StatusCode, Json<Ingredient>)> {
    let Some(ingredient) = conn.find_ingredient_by_id(path_params.ingredient_id).await? else {
        return Err(ErrorKind::NotFound
            .with_message(format!("Ingredient not found: {}", path_params.ingredient_id))
            .with_resource("ingredient"));
    };

    Ok((StatusCode::OK, Json(Ingredient::from_model(ingredient))))
}

fn read_ingredient_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get ingredient")
        .description("Returns a single ingredient by id.")
        .response::<200, Json<Ingredient>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Updates an existing ingredient. Only provided fields are updated.
#[tracing::instrument(skip_all, fields(ingredient_id = path_params.ingredient_id))]
async fn update_ingredient(
    PgPool(mut conn): PgPool,
    Path(path_params): Path<IngredientPathParams>,
    ValidateJson(request): ValidateJson<UpdateIngredient>,
) -> Result<(StatusCode, Json<Ingredient>)> {
    tracing::debug!(target: TRACING_TARGET, "Updating ingredient");

    if conn
        .find_ingredient_by_id(path_params.ingredient_id)
        .await?
        .is_none()
    {
        return Err(ErrorKind::NotFound
            .with_message(format!("Ingredient not found: {}", path_params.ingredient_id))
            .with_resource("ingredient"));
    }

    let ingredient = conn
        .update_ingredient(path_params.ingredient_id, request.into_model())
        .await?;

    tracing::info!(target: TRACING_TARGET, "Ingredient updated");

    Ok((StatusCode::OK, Json(Ingredient::from_model(ingredient))))
}

fn update_ingredient_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Update ingredient")
        .description("Updates an existing ingredient. Only provided fields are updated.")
        .response::<200, Json<Ingredient>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Deletes an ingredient.
///
/// Join rows referencing the ingredient are removed in the same
/// transaction, so no recipe is left pointing at a missing ingredient.
#[tracing::instrument(skip_all, fields(ingredient_id = path_params.ingredient_id))]
async fn delete_ingredient(
    PgPool(mut conn): PgPool,
    Path(path_params): Path<IngredientPathParams>,
) -> Result<StatusCode> {
    tracing::debug!(target: TRACING_TARGET, "Deleting ingredient");

    if conn
        .find_ingredient_by_id(path_params.ingredient_id)
        .await?
        .is_none()
    {
        return Err(ErrorKind::NotFound
            .with_message(format!("Ingredient not found: {}", path_params.ingredient_id))
            .with_resource("ingredient"));
    }

    conn.delete_ingredient(path_params.ingredient_id).await?;

    tracing::info!(target: TRACING_TARGET, "Ingredient deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn delete_ingredient_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete ingredient")
        .description("Deletes an ingredient together with its recipe join rows.")
        .response::<204, ()>()
        .response::<404, Json<ErrorResponse>>()
}

/// Returns a [`Router`] with all ingredient-related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::{get_with, post_with};

    ApiRouter::new()
        .api_route(
            "/ingredients",
            post_with(create_ingredient, create_ingredient_docs)
                .get_with(list_ingredients, list_ingredients_docs),
        )
        .api_route(
            "/ingredients/{ingredient_id}",
            get_with(read_ingredient, read_ingredient_docs)
                .put_with(update_ingredient, update_ingredient_docs)
                .delete_with(delete_ingredient, delete_ingredient_docs),
        )
}
