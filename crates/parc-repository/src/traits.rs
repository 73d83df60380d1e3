//! Repository trait definitions.

use crate::StoreTransaction;
use async_trait::async_trait;
use parc_core::{
    Company, CompanyId, Computer, ComputerId, NewComputer, Page, PageFilter, PageRequest,
    ParcResult, User, UserId,
};

/// Computer repository.
///
/// Reads report absence as `None`; only store failures surface as errors.
#[async_trait]
pub trait ComputerRepository: Send + Sync {
    /// Persists a new computer and returns it with its assigned id.
    async fn create(&self, draft: &NewComputer) -> ParcResult<Computer>;

    /// Updates an existing computer.
    async fn update(&self, computer: &Computer) -> ParcResult<Computer>;

    /// Deletes a computer by ID. Returns `true` iff exactly one row was
    /// removed.
    async fn delete(&self, id: ComputerId) -> ParcResult<bool>;

    /// Deletes every computer owned by a company, inside the
    /// caller-supplied transaction. Returns `true` iff at least one row
    /// was removed.
    ///
    /// The caller owns the transaction and must roll it back when this
    /// fails; partial success is never observable.
    async fn delete_by_company(
        &self,
        company_id: CompanyId,
        tx: &mut StoreTransaction<'_>,
    ) -> ParcResult<bool>;

    /// Finds a computer by ID.
    async fn find_by_id(&self, id: ComputerId) -> ParcResult<Option<Computer>>;

    /// Finds a computer by exact name.
    async fn find_by_name(&self, name: &str) -> ParcResult<Option<Computer>>;

    /// Fetches one page of computers matching the filter, with the total
    /// match count across all pages.
    async fn find_page(&self, filter: &PageFilter) -> ParcResult<Page<Computer>>;

    /// Counts the computers matching the filter.
    async fn count(&self, filter: &PageFilter) -> ParcResult<u64>;
}

/// Company repository.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Finds a company by ID.
    async fn find_by_id(&self, id: CompanyId) -> ParcResult<Option<Company>>;

    /// Returns every company, ordered by id. Used for selection lists.
    async fn find_all(&self) -> ParcResult<Vec<Company>>;

    /// Fetches one page of companies.
    async fn find_page(&self, page: PageRequest) -> ParcResult<Page<Company>>;

    /// Persists a new company and returns it with its assigned id.
    async fn create(&self, name: &str) -> ParcResult<Company>;

    /// Deletes a company and all computers it owns, as one unit of work.
    /// Returns `true` iff the company row was removed.
    async fn delete(&self, id: CompanyId) -> ParcResult<bool>;

    /// Counts all companies.
    async fn count(&self) -> ParcResult<u64>;
}

/// User repository, backing the authentication lookup path.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> ParcResult<Option<User>>;

    /// Finds a user by username.
    async fn find_by_username(&self, username: &str) -> ParcResult<Option<User>>;

    /// Fetches one page of users.
    async fn find_page(&self, page: PageRequest) -> ParcResult<Page<User>>;
}
