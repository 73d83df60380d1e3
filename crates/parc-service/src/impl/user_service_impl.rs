//! User service implementation.

use crate::dto::{LoginRequest, UserListResponse, UserResponse};
use crate::user_service::UserService;
use async_trait::async_trait;
use parc_core::{PageRequest, ParcError, ParcResult, UserId, ValidateExt};
use parc_repository::UserRepository;
use parc_security::PasswordHasher;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// User service implementation.
pub struct UserServiceImpl<U: UserRepository> {
    user_repository: Arc<U>,
    password_hasher: Arc<PasswordHasher>,
}

impl<U: UserRepository> UserServiceImpl<U> {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<U>, password_hasher: Arc<PasswordHasher>) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<U: UserRepository + 'static> UserService for UserServiceImpl<U> {
    async fn get_user(&self, id: UserId) -> ParcResult<UserResponse> {
        debug!("Getting user: {}", id);

        let user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ParcError::not_found("User", id))?;

        Ok(UserResponse::from(user))
    }

    async fn load_by_username(&self, username: &str) -> ParcResult<UserResponse> {
        debug!("Loading user by username: {}", username);

        let user = self
            .user_repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| ParcError::not_found("User", username))?;

        Ok(UserResponse::from(user))
    }

    async fn list_users(&self, page: PageRequest) -> ParcResult<UserListResponse> {
        debug!("Listing users, page: {}, size: {}", page.page, page.size);

        let users = self.user_repository.find_page(page).await?;
        let info = users.info;

        Ok(UserListResponse {
            users: users.content.into_iter().map(UserResponse::from).collect(),
            page: info.page,
            size: info.size,
            total_elements: info.total_elements,
            total_pages: info.total_pages,
        })
    }

    async fn authenticate(&self, request: LoginRequest) -> ParcResult<UserResponse> {
        debug!("Authenticating user: {}", request.username);

        request.validate_request()?;

        // Unknown users and wrong passwords are indistinguishable on the
        // wire.
        let user = self
            .user_repository
            .find_by_username(&request.username)
            .await?
            .ok_or(ParcError::InvalidCredentials)?;

        if !self
            .password_hasher
            .verify(&request.password, &user.password_hash)?
        {
            warn!("Failed login attempt for user: {}", request.username);
            return Err(ParcError::InvalidCredentials);
        }

        info!("User authenticated: {}", user.username);
        Ok(UserResponse::from(user))
    }
}

impl<U: UserRepository> std::fmt::Debug for UserServiceImpl<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}
