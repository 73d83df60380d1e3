//! Computer-related DTOs.
//!
//! Dates cross the wire as strings in the configured pattern; parsing
//! and rendering happen in [`crate::mappers`].

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a new computer.
///
/// Blank-but-nonempty names are rejected by the service layer, which
/// trims before validating.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateComputerRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    /// Introduced date in the configured pattern.
    pub introduced: Option<String>,

    /// Discontinued date in the configured pattern.
    pub discontinued: Option<String>,

    /// Owning company id.
    pub company_id: Option<i64>,
}

/// Request to update a computer. Replaces every mutable field.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateComputerRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    /// Introduced date in the configured pattern.
    pub introduced: Option<String>,

    /// Discontinued date in the configured pattern.
    pub discontinued: Option<String>,

    /// Owning company id.
    pub company_id: Option<i64>,
}

/// Computer response DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ComputerDto {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub introduced: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discontinued: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

/// Computer list response with pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComputerListResponse {
    pub computers: Vec<ComputerDto>,
    pub page: usize,
    pub size: usize,
    pub total_elements: u64,
    pub total_pages: u64,
}
