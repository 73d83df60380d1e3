//! MySQL company repository implementation.

use super::store_err;
use crate::{CompanyRepository, ComputerRepository, DatabasePool, MySqlComputerRepository};
use async_trait::async_trait;
use parc_core::{Company, CompanyId, Page, PageRequest, ParcError, ParcResult};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::{debug, warn};

/// MySQL company repository implementation.
///
/// Company deletion owns the transaction for the two-step
/// "delete company and its computers" unit of work.
#[derive(Clone)]
pub struct MySqlCompanyRepository {
    pool: Arc<DatabasePool>,
    computers: Arc<MySqlComputerRepository>,
}

impl MySqlCompanyRepository {
    /// Creates a new MySQL company repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>, computers: Arc<MySqlComputerRepository>) -> Self {
        Self { pool, computers }
    }
}

/// Database row representation of a company.
#[derive(Debug, FromRow)]
struct CompanyRow {
    id: i64,
    name: String,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Company::new(CompanyId::new(row.id), row.name)
    }
}

#[async_trait]
impl CompanyRepository for MySqlCompanyRepository {
    async fn find_by_id(&self, id: CompanyId) -> ParcResult<Option<Company>> {
        debug!("Finding company by id: {}", id);

        let row = sqlx::query_as::<_, CompanyRow>("SELECT id, name FROM company WHERE id = ?")
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await
            .map_err(store_err("find_by_id"))?;

        Ok(row.map(Company::from))
    }

    async fn find_all(&self) -> ParcResult<Vec<Company>> {
        debug!("Listing all companies");

        let rows = sqlx::query_as::<_, CompanyRow>("SELECT id, name FROM company ORDER BY id")
            .fetch_all(self.pool.inner())
            .await
            .map_err(store_err("find_all"))?;

        Ok(rows.into_iter().map(Company::from).collect())
    }

    async fn find_page(&self, page: PageRequest) -> ParcResult<Page<Company>> {
        debug!("Fetching company page {} (size {})", page.page, page.size);

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM company")
            .fetch_one(self.pool.inner())
            .await
            .map_err(store_err("find_page"))?;

        let rows = sqlx::query_as::<_, CompanyRow>(
            "SELECT id, name FROM company ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(self.pool.inner())
        .await
        .map_err(store_err("find_page"))?;

        let companies: Vec<Company> = rows.into_iter().map(Company::from).collect();

        Ok(Page::new(companies, page.page, page.size, total as u64))
    }

    async fn create(&self, name: &str) -> ParcResult<Company> {
        debug!("Creating company: {}", name);

        let result = sqlx::query("INSERT INTO company (name) VALUES (?)")
            .bind(name)
            .execute(self.pool.inner())
            .await
            .map_err(store_err("create"))?;

        let id = CompanyId::new(result.last_insert_id() as i64);

        self.find_by_id(id)
            .await?
            .ok_or_else(|| ParcError::Internal("Failed to fetch inserted company".to_string()))
    }

    async fn delete(&self, id: CompanyId) -> ParcResult<bool> {
        debug!("Deleting company {} and its computers", id);

        let mut tx = self.pool.begin().await?;

        // Cascade first; the shared transaction is rolled back before the
        // error propagates, so partial success is never observable.
        if let Err(e) = self.computers.delete_by_company(id, &mut tx).await {
            warn!("Rolling back company {} delete: {}", id, e);
            tx.rollback().await.ok();
            return Err(e);
        }

        let result = match sqlx::query("DELETE FROM company WHERE id = ?")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
        {
            Ok(result) => result,
            Err(e) => {
                warn!("Rolling back company {} delete: {}", id, e);
                tx.rollback().await.ok();
                return Err(store_err("delete")(e));
            }
        };

        tx.commit()
            .await
            .map_err(|e| ParcError::Database(format!("Failed to commit company delete: {}", e)))?;

        Ok(result.rows_affected() == 1)
    }

    async fn count(&self) -> ParcResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM company")
            .fetch_one(self.pool.inner())
            .await
            .map_err(store_err("count"))?;

        Ok(count as u64)
    }
}

impl std::fmt::Debug for MySqlCompanyRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlCompanyRepository").finish_non_exhaustive()
    }
}
