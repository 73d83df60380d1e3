//! Company management controller.

use crate::{
    extractors::PaginationQuery,
    responses::{created, no_content, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use parc_core::{CompanyId, ParcError};
use parc_service::{CompanyDto, CompanyListResponse, CreateCompanyRequest};
use tracing::debug;

/// Creates the company router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_companies).post(create_company))
        .route("/page", get(list_companies_page))
        .route("/:id", get(get_company).delete(delete_company))
}

/// List every company, for selection lists.
#[utoipa::path(
    get,
    path = "/companies",
    tag = "companies",
    responses(
        (status = 200, description = "All companies", body = [CompanyDto])
    )
)]
pub async fn list_companies(State(state): State<AppState>) -> ApiResult<Vec<CompanyDto>> {
    debug!("List companies request");

    let response = state.company_service.list_companies().await?;
    ok(response)
}

/// List companies with pagination.
#[utoipa::path(
    get,
    path = "/companies/page",
    tag = "companies",
    params(
        ("page" = Option<usize>, Query, description = "1-based page number"),
        ("size" = Option<usize>, Query, description = "Page size")
    ),
    responses(
        (status = 200, description = "One page of companies", body = CompanyListResponse)
    )
)]
pub async fn list_companies_page(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> ApiResult<CompanyListResponse> {
    debug!("List companies page request");

    let response = state.company_service.list_companies_page(query.into()).await?;
    ok(response)
}

/// Get a company by ID.
#[utoipa::path(
    get,
    path = "/companies/{id}",
    tag = "companies",
    params(("id" = i64, Path, description = "Company id")),
    responses(
        (status = 200, description = "The company", body = CompanyDto),
        (status = 404, description = "Company not found")
    )
)]
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<CompanyDto> {
    debug!("Get company request: {}", id);

    let id = parse_company_id(&id)?;
    let response = state.company_service.get_company(id).await?;
    ok(response)
}

/// Create a new company.
#[utoipa::path(
    post,
    path = "/companies",
    tag = "companies",
    request_body = CreateCompanyRequest,
    responses(
        (status = 201, description = "Company created", body = CompanyDto),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn create_company(
    State(state): State<AppState>,
    Json(request): Json<CreateCompanyRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CompanyDto>>), AppError> {
    debug!("Create company request: {}", request.name);

    let response = state.company_service.create_company(request).await?;
    Ok(created(response))
}

/// Delete a company and every computer it owns.
#[utoipa::path(
    delete,
    path = "/companies/{id}",
    tag = "companies",
    params(("id" = i64, Path, description = "Company id")),
    responses(
        (status = 204, description = "Company and its computers deleted"),
        (status = 404, description = "Company not found")
    )
)]
pub async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete company request: {}", id);

    let id = parse_company_id(&id)?;
    state.company_service.delete_company(id).await?;

    Ok(no_content())
}

/// Helper to parse a company ID from a path parameter.
fn parse_company_id(id: &str) -> Result<CompanyId, AppError> {
    CompanyId::parse(id)
        .map_err(|_| AppError(ParcError::Validation(format!("Invalid company ID: {}", id))))
}
