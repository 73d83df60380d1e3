//! OpenAPI documentation configuration.
//!
//! This module provides OpenAPI/Swagger documentation generation for the
//! REST API.

use parc_core::{ErrorResponse, FieldError, UserRole};
use parc_service::{
    CompanyDto, CompanyListResponse, ComputerDto, ComputerListResponse, CreateCompanyRequest,
    CreateComputerRequest, LoginRequest, UpdateComputerRequest, UserListResponse, UserResponse,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the Parc API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Parc API",
        version = "0.1.0",
        description = "RESTful API for the Parc computer fleet inventory",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Computer endpoints
        crate::controllers::computer_controller::list_computers,
        crate::controllers::computer_controller::create_computer,
        crate::controllers::computer_controller::get_computer,
        crate::controllers::computer_controller::update_computer,
        crate::controllers::computer_controller::delete_computer,
        // Company endpoints
        crate::controllers::company_controller::list_companies,
        crate::controllers::company_controller::list_companies_page,
        crate::controllers::company_controller::get_company,
        crate::controllers::company_controller::create_company,
        crate::controllers::company_controller::delete_company,
        // Auth endpoints
        crate::controllers::auth_controller::login,
        crate::controllers::auth_controller::list_users,
        crate::controllers::auth_controller::get_user,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            // Core types
            UserRole,
            ErrorResponse,
            FieldError,
            // Computer DTOs
            CreateComputerRequest,
            UpdateComputerRequest,
            ComputerDto,
            ComputerListResponse,
            // Company DTOs
            CreateCompanyRequest,
            CompanyDto,
            CompanyListResponse,
            // User DTOs
            LoginRequest,
            UserResponse,
            UserListResponse,
        )
    ),
    tags(
        (name = "computers", description = "Computer inventory endpoints"),
        (name = "companies", description = "Company endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
