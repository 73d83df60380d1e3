//! Computer service trait definition.

use crate::dto::{ComputerDto, ComputerListResponse, CreateComputerRequest, UpdateComputerRequest};
use async_trait::async_trait;
use parc_core::{ComputerId, PageFilter, ParcResult};

/// Computer service.
#[async_trait]
pub trait ComputerService: Send + Sync {
    /// Creates a new computer.
    async fn create_computer(&self, request: CreateComputerRequest) -> ParcResult<ComputerDto>;

    /// Gets a computer by ID.
    async fn get_computer(&self, id: ComputerId) -> ParcResult<ComputerDto>;

    /// Gets a computer by exact name.
    async fn get_computer_by_name(&self, name: &str) -> ParcResult<ComputerDto>;

    /// Lists computers matching the page filter.
    async fn list_computers(&self, filter: PageFilter) -> ParcResult<ComputerListResponse>;

    /// Updates a computer, replacing every mutable field.
    async fn update_computer(
        &self,
        id: ComputerId,
        request: UpdateComputerRequest,
    ) -> ParcResult<ComputerDto>;

    /// Deletes a computer.
    async fn delete_computer(&self, id: ComputerId) -> ParcResult<()>;
}
