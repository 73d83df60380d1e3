//! Computer service implementation.

use crate::computer_service::ComputerService;
use crate::dto::{ComputerDto, ComputerListResponse, CreateComputerRequest, UpdateComputerRequest};
use crate::mappers::ComputerMapper;
use async_trait::async_trait;
use parc_core::{
    CompanyId, CompanyRef, Computer, ComputerId, PageFilter, ParcError, ParcResult, ValidateExt,
};
use parc_repository::{CompanyRepository, ComputerRepository};
use std::sync::Arc;
use tracing::{debug, info};

/// Computer service implementation.
pub struct ComputerServiceImpl<R: ComputerRepository, C: CompanyRepository> {
    computer_repository: Arc<R>,
    company_repository: Arc<C>,
    mapper: ComputerMapper,
}

impl<R: ComputerRepository, C: CompanyRepository> ComputerServiceImpl<R, C> {
    /// Creates a new computer service.
    pub fn new(
        computer_repository: Arc<R>,
        company_repository: Arc<C>,
        mapper: ComputerMapper,
    ) -> Self {
        Self {
            computer_repository,
            company_repository,
            mapper,
        }
    }

    /// Resolves a requested company id to a denormalized reference,
    /// rejecting references to companies that do not exist.
    async fn resolve_company(&self, id: Option<CompanyId>) -> ParcResult<Option<CompanyRef>> {
        match id {
            None => Ok(None),
            Some(id) => {
                let company = self
                    .company_repository
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| {
                        ParcError::Validation(format!("Company {} does not exist", id))
                    })?;
                Ok(Some(CompanyRef::new(company.id, company.name)))
            }
        }
    }
}

#[async_trait]
impl<R, C> ComputerService for ComputerServiceImpl<R, C>
where
    R: ComputerRepository + 'static,
    C: CompanyRepository + 'static,
{
    async fn create_computer(&self, request: CreateComputerRequest) -> ParcResult<ComputerDto> {
        debug!("Creating computer: {}", request.name);

        request.validate_request()?;

        let draft = self.mapper.to_draft(&request)?;
        if draft.name.is_empty() {
            return Err(ParcError::Validation("Name must not be blank".to_string()));
        }

        // Reject dangling company references before touching the store.
        self.resolve_company(draft.company_id).await?;

        let created = self.computer_repository.create(&draft).await?;

        info!("Computer created: {}", created.id);
        Ok(self.mapper.to_dto(created))
    }

    async fn get_computer(&self, id: ComputerId) -> ParcResult<ComputerDto> {
        debug!("Getting computer: {}", id);

        let computer = self
            .computer_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ParcError::not_found("Computer", id))?;

        Ok(self.mapper.to_dto(computer))
    }

    async fn get_computer_by_name(&self, name: &str) -> ParcResult<ComputerDto> {
        debug!("Getting computer by name: {}", name);

        let computer = self
            .computer_repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| ParcError::not_found("Computer", name))?;

        Ok(self.mapper.to_dto(computer))
    }

    async fn list_computers(&self, filter: PageFilter) -> ParcResult<ComputerListResponse> {
        debug!(
            "Listing computers, page: {}, size: {}",
            filter.page.page, filter.page.size
        );

        let page = self.computer_repository.find_page(&filter).await?;
        Ok(self.mapper.to_list_response(page))
    }

    async fn update_computer(
        &self,
        id: ComputerId,
        request: UpdateComputerRequest,
    ) -> ParcResult<ComputerDto> {
        debug!("Updating computer: {}", id);

        request.validate_request()?;

        self.computer_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ParcError::not_found("Computer", id))?;

        let draft = self.mapper.to_update_draft(&request)?;
        if draft.name.is_empty() {
            return Err(ParcError::Validation("Name must not be blank".to_string()));
        }

        let company = self.resolve_company(draft.company_id).await?;

        let computer = Computer {
            id,
            name: draft.name,
            introduced: draft.introduced,
            discontinued: draft.discontinued,
            company,
        };

        let updated = self.computer_repository.update(&computer).await?;

        info!("Computer updated: {}", id);
        Ok(self.mapper.to_dto(updated))
    }

    async fn delete_computer(&self, id: ComputerId) -> ParcResult<()> {
        debug!("Deleting computer: {}", id);

        let deleted = self.computer_repository.delete(id).await?;

        if !deleted {
            return Err(ParcError::not_found("Computer", id));
        }

        info!("Computer deleted: {}", id);
        Ok(())
    }
}

impl<R: ComputerRepository, C: CompanyRepository> std::fmt::Debug for ComputerServiceImpl<R, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComputerServiceImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#impl::test_support::{InMemoryCompanyRepository, InMemoryComputerRepository};
    use parc_core::{Company, FilterOperator, PageRequest};

    fn create_service(
        computers: InMemoryComputerRepository,
        companies: InMemoryCompanyRepository,
    ) -> ComputerServiceImpl<InMemoryComputerRepository, InMemoryCompanyRepository> {
        ComputerServiceImpl::new(
            Arc::new(computers),
            Arc::new(companies),
            ComputerMapper::default(),
        )
    }

    fn companies() -> Vec<Company> {
        vec![
            Company::new(CompanyId::new(1), "Apple Inc."),
            Company::new(CompanyId::new(2), "Commodore"),
        ]
    }

    fn seeded_service(
    ) -> ComputerServiceImpl<InMemoryComputerRepository, InMemoryCompanyRepository> {
        create_service(
            InMemoryComputerRepository::with_companies(&companies()),
            InMemoryCompanyRepository::with_companies(companies()),
        )
    }

    fn create_request(name: &str) -> CreateComputerRequest {
        CreateComputerRequest {
            name: name.to_string(),
            introduced: None,
            discontinued: None,
            company_id: None,
        }
    }

    #[tokio::test]
    async fn test_create_computer_success() {
        let service = seeded_service();

        let request = CreateComputerRequest {
            name: "Macintosh 128K".to_string(),
            introduced: Some("1984-01-24".to_string()),
            discontinued: None,
            company_id: Some(1),
        };

        let dto = service.create_computer(request).await.unwrap();
        assert!(dto.id > 0);
        assert_eq!(dto.name, "Macintosh 128K");
        assert_eq!(dto.introduced.as_deref(), Some("1984-01-24"));
        assert_eq!(dto.company_name.as_deref(), Some("Apple Inc."));
    }

    #[tokio::test]
    async fn test_create_computer_blank_name_rejected() {
        let service = seeded_service();

        let result = service.create_computer(create_request("   ")).await;
        assert!(matches!(result, Err(ParcError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_computer_unknown_company_rejected() {
        let service = seeded_service();

        let mut request = create_request("Orphan");
        request.company_id = Some(99);

        let result = service.create_computer(request).await;
        assert!(matches!(result, Err(ParcError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_computer_invalid_date_rejected() {
        let service = seeded_service();

        let mut request = create_request("Misdated");
        request.introduced = Some("24/01/1984".to_string());

        let result = service.create_computer(request).await;
        assert!(matches!(result, Err(ParcError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_computer_roundtrip() {
        let service = seeded_service();

        let created = service
            .create_computer(create_request("Apple II"))
            .await
            .unwrap();
        let fetched = service
            .get_computer(ComputerId::new(created.id))
            .await
            .unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_computer_not_found() {
        let service = seeded_service();

        let result = service.get_computer(ComputerId::new(404)).await;
        assert!(matches!(result, Err(ParcError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_get_computer_by_name() {
        let service = seeded_service();

        service
            .create_computer(create_request("Commodore 64"))
            .await
            .unwrap();

        let dto = service.get_computer_by_name("Commodore 64").await.unwrap();
        assert_eq!(dto.name, "Commodore 64");

        let missing = service.get_computer_by_name("ZX Spectrum").await;
        assert!(matches!(missing, Err(ParcError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_computers_filtered() {
        let service = seeded_service();

        for name in ["Macintosh", "MacBook", "Amiga"] {
            service.create_computer(create_request(name)).await.unwrap();
        }

        let filter = PageFilter::unfiltered(PageRequest::new(1, 10)).name_contains("Mac");
        let response = service.list_computers(filter).await.unwrap();

        assert_eq!(response.total_elements, 2);
        assert_eq!(response.computers.len(), 2);
        assert_eq!(response.total_pages, 1);
    }

    #[tokio::test]
    async fn test_list_computers_operator_and() {
        let service = seeded_service();

        let mut mac = create_request("Macintosh");
        mac.company_id = Some(1);
        service.create_computer(mac).await.unwrap();
        service
            .create_computer(create_request("Mac clone"))
            .await
            .unwrap();

        let filter = PageFilter::unfiltered(PageRequest::first())
            .name_contains("Mac")
            .company_contains("Apple")
            .operator(FilterOperator::And);
        let response = service.list_computers(filter).await.unwrap();

        assert_eq!(response.total_elements, 1);
        assert_eq!(response.computers[0].name, "Macintosh");
    }

    #[tokio::test]
    async fn test_update_computer_success() {
        let service = seeded_service();

        let created = service
            .create_computer(create_request("Proto"))
            .await
            .unwrap();

        let request = UpdateComputerRequest {
            name: "Proto Mk II".to_string(),
            introduced: Some("1990-01-01".to_string()),
            discontinued: None,
            company_id: Some(2),
        };

        let updated = service
            .update_computer(ComputerId::new(created.id), request)
            .await
            .unwrap();

        assert_eq!(updated.name, "Proto Mk II");
        assert_eq!(updated.introduced.as_deref(), Some("1990-01-01"));
        assert_eq!(updated.company_name.as_deref(), Some("Commodore"));
    }

    #[tokio::test]
    async fn test_update_computer_not_found() {
        let service = seeded_service();

        let request = UpdateComputerRequest {
            name: "Ghost".to_string(),
            introduced: None,
            discontinued: None,
            company_id: None,
        };

        let result = service
            .update_computer(ComputerId::new(404), request)
            .await;
        assert!(matches!(result, Err(ParcError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_computer_success_then_not_found() {
        let service = seeded_service();

        let created = service
            .create_computer(create_request("Short-lived"))
            .await
            .unwrap();
        let id = ComputerId::new(created.id);

        service.delete_computer(id).await.unwrap();

        let again = service.delete_computer(id).await;
        assert!(matches!(again, Err(ParcError::NotFound { .. })));
    }
}
