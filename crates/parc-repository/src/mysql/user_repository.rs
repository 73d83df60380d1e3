//! MySQL user repository implementation.

use super::store_err;
use crate::{DatabasePool, UserRepository};
use async_trait::async_trait;
use parc_core::{Page, PageRequest, ParcResult, User, UserId, UserRole};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL user repository implementation.
#[derive(Clone)]
pub struct MySqlUserRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlUserRepository {
    /// Creates a new MySQL user repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
    role: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(
            UserId::new(row.id),
            row.username,
            row.password_hash,
            UserRole::parse(&row.role),
        )
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: UserId) -> ParcResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password_hash, role FROM users WHERE id = ?",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await
        .map_err(store_err("find_by_id"))?;

        Ok(row.map(User::from))
    }

    async fn find_by_username(&self, username: &str) -> ParcResult<Option<User>> {
        debug!("Finding user by username: {}", username);

        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password_hash, role FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(self.pool.inner())
        .await
        .map_err(store_err("find_by_username"))?;

        Ok(row.map(User::from))
    }

    async fn find_page(&self, page: PageRequest) -> ParcResult<Page<User>> {
        debug!("Fetching user page {} (size {})", page.page, page.size);

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool.inner())
            .await
            .map_err(store_err("find_page"))?;

        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password_hash, role FROM users ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(self.pool.inner())
        .await
        .map_err(store_err("find_page"))?;

        let users: Vec<User> = rows.into_iter().map(User::from).collect();

        Ok(Page::new(users, page.page, page.size, total as u64))
    }
}

impl std::fmt::Debug for MySqlUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlUserRepository").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_maps_role_leniently() {
        let row = UserRow {
            id: 1,
            username: "root".to_string(),
            password_hash: "hash".to_string(),
            role: "ADMIN".to_string(),
        };
        assert_eq!(User::from(row).role, UserRole::Admin);

        let row = UserRow {
            id: 2,
            username: "guest".to_string(),
            password_hash: "hash".to_string(),
            role: "whatever".to_string(),
        };
        assert_eq!(User::from(row).role, UserRole::User);
    }
}
