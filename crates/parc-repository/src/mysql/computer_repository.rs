//! MySQL computer repository implementation.

use super::store_err;
use crate::filter::filter_clause;
use crate::{ComputerRepository, DatabasePool, StoreTransaction};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use parc_core::{
    CompanyId, CompanyRef, Computer, ComputerId, NewComputer, Page, PageFilter, ParcError,
    ParcResult,
};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

const SELECT_JOIN: &str = "SELECT computer.id, computer.name, computer.introduced, \
     computer.discontinued, company.id AS company_id, company.name AS company_name \
     FROM computer LEFT JOIN company ON computer.company_id = company.id";

const COUNT_JOIN: &str = "SELECT COUNT(*) \
     FROM computer LEFT JOIN company ON computer.company_id = company.id";

/// MySQL computer repository implementation.
#[derive(Clone)]
pub struct MySqlComputerRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlComputerRepository {
    /// Creates a new MySQL computer repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a computer joined with its company.
#[derive(Debug, FromRow)]
struct ComputerRow {
    id: i64,
    name: String,
    introduced: Option<NaiveDateTime>,
    discontinued: Option<NaiveDateTime>,
    company_id: Option<i64>,
    company_name: Option<String>,
}

impl From<ComputerRow> for Computer {
    fn from(row: ComputerRow) -> Self {
        // LEFT JOIN semantics: a NULL company id means no owner, never a
        // zero-valued placeholder.
        let company = row.company_id.map(|id| {
            CompanyRef::new(CompanyId::new(id), row.company_name.unwrap_or_default())
        });

        Computer {
            id: ComputerId::new(row.id),
            name: row.name,
            introduced: row.introduced.map(|dt| dt.date()),
            discontinued: row.discontinued.map(|dt| dt.date()),
            company,
        }
    }
}

/// Widens a date-only value to the midnight datetime stored in the
/// DATETIME columns.
fn to_datetime(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

#[async_trait]
impl ComputerRepository for MySqlComputerRepository {
    async fn create(&self, draft: &NewComputer) -> ParcResult<Computer> {
        debug!("Creating computer: {}", draft.name);

        // MySQL has no RETURNING, so insert then re-select the joined row.
        let result = sqlx::query(
            "INSERT INTO computer (name, introduced, discontinued, company_id) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(&draft.name)
        .bind(draft.introduced.map(to_datetime))
        .bind(draft.discontinued.map(to_datetime))
        .bind(draft.company_id.map(CompanyId::into_inner))
        .execute(self.pool.inner())
        .await
        .map_err(store_err("create"))?;

        let id = ComputerId::new(result.last_insert_id() as i64);

        self.find_by_id(id)
            .await?
            .ok_or_else(|| ParcError::Internal("Failed to fetch inserted computer".to_string()))
    }

    async fn update(&self, computer: &Computer) -> ParcResult<Computer> {
        debug!("Updating computer: {}", computer.id);

        sqlx::query(
            "UPDATE computer SET name = ?, introduced = ?, discontinued = ?, company_id = ? \
             WHERE id = ?",
        )
        .bind(&computer.name)
        .bind(computer.introduced.map(to_datetime))
        .bind(computer.discontinued.map(to_datetime))
        .bind(computer.company_id().map(CompanyId::into_inner))
        .bind(computer.id.into_inner())
        .execute(self.pool.inner())
        .await
        .map_err(store_err("update"))?;

        self.find_by_id(computer.id)
            .await?
            .ok_or_else(|| ParcError::not_found("Computer", computer.id))
    }

    async fn delete(&self, id: ComputerId) -> ParcResult<bool> {
        debug!("Deleting computer: {}", id);

        let result = sqlx::query("DELETE FROM computer WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await
            .map_err(store_err("delete"))?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete_by_company(
        &self,
        company_id: CompanyId,
        tx: &mut StoreTransaction<'_>,
    ) -> ParcResult<bool> {
        debug!("Deleting computers owned by company: {}", company_id);

        let result = sqlx::query("DELETE FROM computer WHERE company_id = ?")
            .bind(company_id.into_inner())
            .execute(&mut **tx)
            .await
            .map_err(store_err("delete_by_company"))?;

        Ok(result.rows_affected() >= 1)
    }

    async fn find_by_id(&self, id: ComputerId) -> ParcResult<Option<Computer>> {
        debug!("Finding computer by id: {}", id);

        let sql = format!("{SELECT_JOIN} WHERE computer.id = ?");
        let row = sqlx::query_as::<_, ComputerRow>(&sql)
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await
            .map_err(store_err("find_by_id"))?;

        Ok(row.map(Computer::from))
    }

    async fn find_by_name(&self, name: &str) -> ParcResult<Option<Computer>> {
        debug!("Finding computer by name: {}", name);

        let sql = format!("{SELECT_JOIN} WHERE computer.name = ?");
        let row = sqlx::query_as::<_, ComputerRow>(&sql)
            .bind(name)
            .fetch_optional(self.pool.inner())
            .await
            .map_err(store_err("find_by_name"))?;

        Ok(row.map(Computer::from))
    }

    async fn find_page(&self, filter: &PageFilter) -> ParcResult<Page<Computer>> {
        debug!(
            "Fetching computer page {} (size {})",
            filter.page.page, filter.page.size
        );

        let clause = filter_clause(filter);
        let sql = format!(
            "{SELECT_JOIN}{} ORDER BY computer.id LIMIT ? OFFSET ?",
            clause.sql
        );

        let mut query = sqlx::query_as::<_, ComputerRow>(&sql);
        for bind in &clause.binds {
            query = query.bind(bind);
        }

        let rows = query
            .bind(filter.page.limit() as i64)
            .bind(filter.page.offset() as i64)
            .fetch_all(self.pool.inner())
            .await
            .map_err(store_err("find_page"))?;

        let computers: Vec<Computer> = rows.into_iter().map(Computer::from).collect();

        // Separate COUNT over the same predicate for the total.
        let total = self.count(filter).await?;

        Ok(Page::new(
            computers,
            filter.page.page,
            filter.page.size,
            total,
        ))
    }

    async fn count(&self, filter: &PageFilter) -> ParcResult<u64> {
        let clause = filter_clause(filter);
        let sql = format!("{COUNT_JOIN}{}", clause.sql);

        let mut query = sqlx::query_scalar::<_, i64>(&sql);
        for bind in &clause.binds {
            query = query.bind(bind);
        }

        let total = query
            .fetch_one(self.pool.inner())
            .await
            .map_err(store_err("count"))?;

        Ok(total as u64)
    }
}

impl std::fmt::Debug for MySqlComputerRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlComputerRepository").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_maps_absent_company() {
        let row = ComputerRow {
            id: 1,
            name: "Altair 8800".to_string(),
            introduced: None,
            discontinued: None,
            company_id: None,
            company_name: None,
        };

        let computer = Computer::from(row);
        assert!(computer.company.is_none());
        assert!(computer.introduced.is_none());
    }

    #[test]
    fn test_row_maps_joined_company() {
        let row = ComputerRow {
            id: 2,
            name: "Macintosh".to_string(),
            introduced: Some(to_datetime(
                NaiveDate::from_ymd_opt(1984, 1, 24).unwrap(),
            )),
            discontinued: None,
            company_id: Some(7),
            company_name: Some("Apple Inc.".to_string()),
        };

        let computer = Computer::from(row);
        let company = computer.company.expect("company should be present");
        assert_eq!(company.id, CompanyId::new(7));
        assert_eq!(company.name, "Apple Inc.");
        assert_eq!(
            computer.introduced,
            NaiveDate::from_ymd_opt(1984, 1, 24)
        );
    }

    #[test]
    fn test_to_datetime_is_midnight() {
        let date = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
        let dt = to_datetime(date);
        assert_eq!(dt.date(), date);
        assert_eq!(dt.time(), NaiveTime::MIN);
    }
}
