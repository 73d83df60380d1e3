//! Data transfer objects for the service layer.

pub mod company_dto;
pub mod computer_dto;
pub mod user_dto;

pub use company_dto::*;
pub use computer_dto::*;
pub use user_dto::*;
