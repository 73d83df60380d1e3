//! Application state for Axum handlers.

use parc_service::{CompanyService, ComputerService, UserService};
use std::sync::Arc;

/// Shared application state.
///
/// Services are constructed once at startup and live for the whole
/// process.
#[derive(Clone)]
pub struct AppState {
    pub computer_service: Arc<dyn ComputerService>,
    pub company_service: Arc<dyn CompanyService>,
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        computer_service: Arc<dyn ComputerService>,
        company_service: Arc<dyn CompanyService>,
        user_service: Arc<dyn UserService>,
    ) -> Self {
        Self {
            computer_service,
            company_service,
            user_service,
        }
    }
}
