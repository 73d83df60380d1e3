//! User service trait definition.

use crate::dto::{LoginRequest, UserListResponse, UserResponse};
use async_trait::async_trait;
use parc_core::{PageRequest, ParcResult, UserId};

/// User lookup and credential verification.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Gets a user by ID.
    async fn get_user(&self, id: UserId) -> ParcResult<UserResponse>;

    /// Loads a user by username, for the authentication path.
    async fn load_by_username(&self, username: &str) -> ParcResult<UserResponse>;

    /// Lists users with pagination.
    async fn list_users(&self, page: PageRequest) -> ParcResult<UserListResponse>;

    /// Verifies credentials and returns the matching user.
    ///
    /// Unknown usernames and wrong passwords both surface as
    /// `InvalidCredentials`; the wire never reveals which.
    async fn authenticate(&self, request: LoginRequest) -> ParcResult<UserResponse>;
}
