//! Company service trait definition.

use crate::dto::{CompanyDto, CompanyListResponse, CreateCompanyRequest};
use async_trait::async_trait;
use parc_core::{CompanyId, PageRequest, ParcResult};

/// Company service.
#[async_trait]
pub trait CompanyService: Send + Sync {
    /// Returns every company, for selection lists.
    async fn list_companies(&self) -> ParcResult<Vec<CompanyDto>>;

    /// Lists companies with pagination.
    async fn list_companies_page(&self, page: PageRequest) -> ParcResult<CompanyListResponse>;

    /// Gets a company by ID.
    async fn get_company(&self, id: CompanyId) -> ParcResult<CompanyDto>;

    /// Creates a new company.
    async fn create_company(&self, request: CreateCompanyRequest) -> ParcResult<CompanyDto>;

    /// Deletes a company and every computer it owns.
    async fn delete_company(&self, id: CompanyId) -> ParcResult<()>;
}
