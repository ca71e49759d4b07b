//! Chef management handlers for CRUD and search operations.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::http::StatusCode;
use ladle_postgres::query::ChefRepository;
use ladle_postgres::types::ChefSortField;

use crate::extract::{Json, Path, PgPool, Query, ValidateJson};
use crate::handler::request::{ChefPathParams, CreateChef, SearchParams, UpdateChef};
use crate::handler::response::{Chef, ErrorResponse, Listing};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for chef operations.
const TRACING_TARGET: &str = "ladle_server::handler::chefs";

/// Creates a new chef.
#[tracing::instrument(skip_all)]
async fn create_chef(
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<CreateChef>,
) -> Result<(StatusCode, Json<Chef>)> {
    tracing::debug!(target: TRACING_TARGET, "Creating chef");

    let chef = conn.create_chef(request.into_model()).await?;

    tracing::info!(target: TRACING_TARGET, chef_id = chef.id, "Chef created");

    Ok((StatusCode::CREATED, Json(Chef::from_model(chef))))
}

fn create_chef_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create chef")
        .description("Creates a new chef. The username must not be taken.")
        .response::<201, Json<Chef>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<409, Json<ErrorResponse>>()
}

/// Lists or searches chefs.
///
/// Without paging parameters the full filtered list is returned as a plain
/// array; any of `page`, `pageSize`, `sortBy`, `sortDirection` switches the
/// response to a page envelope.
#[tracing::instrument(skip_all)]
async fn list_chefs(
    PgPool(mut conn): PgPool,
    Query(params): Query<SearchParams>,
) -> Result<Listing<Chef>> {
    if params.wants_page() {
        let sort = params.sort::<ChefSortField>()?;
        let pagination = params.pagination()?;

        let page = conn
            .search_chefs_paged(params.term(), sort, pagination)
            .await?;

        tracing::debug!(
            target: TRACING_TARGET,
            total = page.total_elements,
            page = page.page_number,
            "Chefs page listed",
        );

        return Ok(Listing::paged(page.map(Chef::from_model)));
    }

    let chefs = conn.search_chefs(params.term()).await?;

    tracing::debug!(target: TRACING_TARGET, count = chefs.len(), "Chefs listed");

    Ok(Listing::plain(chefs.into_iter().map(Chef::from_model).collect()))
}

fn list_chefs_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List chefs")
        .description(
            "Lists chefs, filtered by an optional case-insensitive username \
             substring. Paging or sorting parameters switch the response from \
             a plain array to a page envelope.",
        )
        .response::<200, Json<Vec<Chef>>>()
        .response::<400, Json<ErrorResponse>>()
}

/// Retrieves a single chef by id.
#[tracing::instrument(skip_all, fields(chef_id = path_params.chef_id))]
async fn read_chef(
    PgPool(mut conn): PgPool,
    Path(path_params): Path<ChefPathParams>,
) -> Result<(StatusCode, Json<Chef>)> {
    let Some(chef) = conn.find_chef_by_id(path_params.chef_id).await? else {
        return Err(ErrorKind::NotFound
            .with_message(format!("Chef not found: {}", path_params.chef_id))
            .with_resource("chef"));
    };

    Ok((StatusCode::OK, Json(Chef::from_model(chef))))
}

fn read_chef_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get chef")
        .description("Returns a single chef by id.")
        .response::<200, Json<Chef>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Updates an existing chef. Only provided fields are updated.
#[tracing::instrument(skip_all, fields(chef_id = path_params.chef_id))]
async fn update_chef(
    PgPool(mut conn): PgPool,
    Path(path_params): Path<ChefPathParams>,
    ValidateJson(request): ValidateJson<UpdateChef>,
) -> Result<(StatusCode, Json<Chef>)> {
    tracing::debug!(target: TRACING_TARGET, "Updating chef");

    if conn.find_chef_by_id(path_params.chef_id).await?.is_none() {
        return Err(ErrorKind::NotFound
            .with_message(format!("Chef not found: {}", path_params.chef_id))
            .with_resource("chef"));
    }

    let chef = conn
        .update_chef(path_params.chef_id, request.into_model())
        .await?;

    tracing::info!(target: TRACING_TARGET, "Chef updated");

    Ok((StatusCode::OK, Json(Chef::from_model(chef))))
}

fn update_chef_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Update chef")
        .description("Updates an existing chef. Only provided fields are updated.")
        .response::<200, Json<Chef>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
        .response::<409, Json<ErrorResponse>>()
}

/// Deletes a chef together with their recipes.
///
/// The chef's recipes and those recipes' join rows are removed in the same
/// transaction, so no orphaned references survive a partial failure.
#[tracing::instrument(skip_all, fields(chef_id = path_params.chef_id))]
async fn delete_chef(
    PgPool(mut conn): PgPool,
    Path(path_params): Path<ChefPathParams>,
) -> Result<StatusCode> {
    tracing::debug!(target: TRACING_TARGET, "Deleting chef");

    if conn.find_chef_by_id(path_params.chef_id).await?.is_none() {
        return Err(ErrorKind::NotFound
            .with_message(format!("Chef not found: {}", path_params.chef_id))
            .with_resource("chef"));
    }

    conn.delete_chef(path_params.chef_id).await?;

    tracing::info!(target: TRACING_TARGET, "Chef deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn delete_chef_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete chef")
        .description("Deletes a chef together with their recipes and join rows.")
        .response::<204, ()>()
        .response::<404, Json<ErrorResponse>>()
}

/// Returns a [`Router`] with all chef-related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::{get_with, post_with};

    ApiRouter::new()
        .api_route(
            "/chefs",
            post_with(create_chef, create_chef_docs).get_with(list_chefs, list_chefs_docs),
        )
        .api_route(
            "/chefs/{chef_id}",
            get_with(read_chef, read_chef_docs)
                .put_with(update_chef, update_chef_docs)
                .delete_with(delete_chef, delete_chef_docs),
        )
}
