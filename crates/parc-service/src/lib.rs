//! # Parc Service
//!
//! Business logic for the Parc inventory: request validation, company
//! resolution, DTO mapping (including date-string rendering), and
//! credential verification. Services sit between the REST layer and the
//! repositories.

pub mod company_service;
pub mod computer_service;
pub mod dto;
pub mod mappers;
pub mod r#impl;
pub mod user_service;

pub use company_service::CompanyService;
pub use computer_service::ComputerService;
pub use dto::*;
pub use mappers::{ComputerMapper, DateFormat};
pub use r#impl::{CompanyServiceImpl, ComputerServiceImpl, UserServiceImpl};
pub use user_service::UserService;
