//! Company service implementation.

use crate::company_service::CompanyService;
use crate::dto::{CompanyDto, CompanyListResponse, CreateCompanyRequest};
use async_trait::async_trait;
use parc_core::{CompanyId, PageRequest, ParcError, ParcResult, ValidateExt};
use parc_repository::CompanyRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// Company service implementation.
pub struct CompanyServiceImpl<C: CompanyRepository> {
    company_repository: Arc<C>,
}

impl<C: CompanyRepository> CompanyServiceImpl<C> {
    /// Creates a new company service.
    pub fn new(company_repository: Arc<C>) -> Self {
        Self { company_repository }
    }
}

#[async_trait]
impl<C: CompanyRepository + 'static> CompanyService for CompanyServiceImpl<C> {
    async fn list_companies(&self) -> ParcResult<Vec<CompanyDto>> {
        debug!("Listing all companies");

        let companies = self.company_repository.find_all().await?;
        Ok(companies.into_iter().map(CompanyDto::from).collect())
    }

    async fn list_companies_page(&self, page: PageRequest) -> ParcResult<CompanyListResponse> {
        debug!("Listing companies, page: {}, size: {}", page.page, page.size);

        let companies = self.company_repository.find_page(page).await?;
        let info = companies.info;

        Ok(CompanyListResponse {
            companies: companies.content.into_iter().map(CompanyDto::from).collect(),
            page: info.page,
            size: info.size,
            total_elements: info.total_elements,
            total_pages: info.total_pages,
        })
    }

    async fn get_company(&self, id: CompanyId) -> ParcResult<CompanyDto> {
        debug!("Getting company: {}", id);

        let company = self
            .company_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ParcError::not_found("Company", id))?;

        Ok(CompanyDto::from(company))
    }

    async fn create_company(&self, request: CreateCompanyRequest) -> ParcResult<CompanyDto> {
        debug!("Creating company: {}", request.name);

        request.validate_request()?;

        let name = request.name.trim();
        if name.is_empty() {
            return Err(ParcError::Validation("Name must not be blank".to_string()));
        }

        let created = self.company_repository.create(name).await?;

        info!("Company created: {}", created.id);
        Ok(CompanyDto::from(created))
    }

    async fn delete_company(&self, id: CompanyId) -> ParcResult<()> {
        debug!("Deleting company: {}", id);

        let deleted = self.company_repository.delete(id).await?;

        if !deleted {
            return Err(ParcError::not_found("Company", id));
        }

        info!("Company deleted with its computers: {}", id);
        Ok(())
    }
}

impl<C: CompanyRepository> std::fmt::Debug for CompanyServiceImpl<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompanyServiceImpl").finish_non_exhaustive()
    }
}
