//! Authentication controller.
//!
//! Credential verification only; session and token issuance live outside
//! this service.

use crate::{
    extractors::PaginationQuery,
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use parc_core::{ParcError, UserId};
use parc_service::{LoginRequest, UserListResponse, UserResponse};
use tracing::debug;

/// Creates the auth/user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/users", get(list_users))
        .route("/users/:id", get(get_user))
}

/// Verify credentials and return the matching user.
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = UserResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<UserResponse> {
    debug!("Login request: {}", request.username);

    let response = state.user_service.authenticate(request).await?;
    ok(response)
}

/// List users with pagination.
#[utoipa::path(
    get,
    path = "/auth/users",
    tag = "auth",
    params(
        ("page" = Option<usize>, Query, description = "1-based page number"),
        ("size" = Option<usize>, Query, description = "Page size")
    ),
    responses(
        (status = 200, description = "One page of users", body = UserListResponse)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> ApiResult<UserListResponse> {
    debug!("List users request");

    let response = state.user_service.list_users(query.into()).await?;
    ok(response)
}

/// Get a user by ID.
#[utoipa::path(
    get,
    path = "/auth/users/{id}",
    tag = "auth",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<UserResponse> {
    debug!("Get user request: {}", id);

    let id = UserId::parse(&id)
        .map_err(|_| ParcError::Validation(format!("Invalid user ID: {}", id)))?;
    let response = state.user_service.get_user(id).await?;
    ok(response)
}
