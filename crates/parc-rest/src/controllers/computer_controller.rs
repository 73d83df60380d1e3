//! Computer management controller.

use crate::{
    extractors::ComputerFilterQuery,
    responses::{created, no_content, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use parc_core::{ComputerId, ParcError};
use parc_service::{ComputerDto, ComputerListResponse, CreateComputerRequest, UpdateComputerRequest};
use tracing::debug;

/// Creates the computer router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_computers).post(create_computer))
        .route(
            "/:id",
            get(get_computer).put(update_computer).delete(delete_computer),
        )
}

/// List computers with pagination and optional name/company filters.
#[utoipa::path(
    get,
    path = "/computers",
    tag = "computers",
    params(
        ("page" = Option<usize>, Query, description = "1-based page number"),
        ("size" = Option<usize>, Query, description = "Page size"),
        ("search" = Option<String>, Query, description = "Computer name substring"),
        ("company" = Option<String>, Query, description = "Company name substring"),
        ("operator" = Option<String>, Query, description = "AND or OR (default OR)")
    ),
    responses(
        (status = 200, description = "One page of computers", body = ComputerListResponse)
    )
)]
pub async fn list_computers(
    State(state): State<AppState>,
    Query(query): Query<ComputerFilterQuery>,
) -> ApiResult<ComputerListResponse> {
    debug!("List computers request");

    let response = state.computer_service.list_computers(query.into()).await?;
    ok(response)
}

/// Create a new computer.
#[utoipa::path(
    post,
    path = "/computers",
    tag = "computers",
    request_body = CreateComputerRequest,
    responses(
        (status = 201, description = "Computer created", body = ComputerDto),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn create_computer(
    State(state): State<AppState>,
    Json(request): Json<CreateComputerRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ComputerDto>>), AppError> {
    debug!("Create computer request: {}", request.name);

    let response = state.computer_service.create_computer(request).await?;
    Ok(created(response))
}

/// Get a computer by ID.
#[utoipa::path(
    get,
    path = "/computers/{id}",
    tag = "computers",
    params(("id" = i64, Path, description = "Computer id")),
    responses(
        (status = 200, description = "The computer", body = ComputerDto),
        (status = 404, description = "Computer not found")
    )
)]
pub async fn get_computer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ComputerDto> {
    debug!("Get computer request: {}", id);

    let id = parse_computer_id(&id)?;
    let response = state.computer_service.get_computer(id).await?;
    ok(response)
}

/// Update a computer, replacing every mutable field.
#[utoipa::path(
    put,
    path = "/computers/{id}",
    tag = "computers",
    params(("id" = i64, Path, description = "Computer id")),
    request_body = UpdateComputerRequest,
    responses(
        (status = 200, description = "Computer updated", body = ComputerDto),
        (status = 404, description = "Computer not found")
    )
)]
pub async fn update_computer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateComputerRequest>,
) -> ApiResult<ComputerDto> {
    debug!("Update computer request: {}", id);

    let id = parse_computer_id(&id)?;
    let response = state.computer_service.update_computer(id, request).await?;
    ok(response)
}

/// Delete a computer.
#[utoipa::path(
    delete,
    path = "/computers/{id}",
    tag = "computers",
    params(("id" = i64, Path, description = "Computer id")),
    responses(
        (status = 204, description = "Computer deleted"),
        (status = 404, description = "Computer not found")
    )
)]
pub async fn delete_computer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete computer request: {}", id);

    let id = parse_computer_id(&id)?;
    state.computer_service.delete_computer(id).await?;

    Ok(no_content())
}

/// Helper to parse a computer ID from a path parameter.
fn parse_computer_id(id: &str) -> Result<ComputerId, AppError> {
    ComputerId::parse(id)
        .map_err(|_| AppError(ParcError::Validation(format!("Invalid computer ID: {}", id))))
}
