//! Domain <-> DTO mapping, including date-string rendering.

use crate::dto::{ComputerDto, ComputerListResponse, CreateComputerRequest, UpdateComputerRequest};
use chrono::NaiveDate;
use parc_core::{CompanyId, Computer, NewComputer, Page, ParcError, ParcResult};

/// Date rendering/parsing capability with a configured chrono pattern.
///
/// The repositories store native datetimes; only the DTO boundary deals
/// in strings.
#[derive(Debug, Clone)]
pub struct DateFormat {
    pattern: String,
}

impl DateFormat {
    /// Creates a formatter for the given chrono pattern.
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// Returns the configured pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Renders a date with the configured pattern.
    #[must_use]
    pub fn format(&self, date: NaiveDate) -> String {
        date.format(&self.pattern).to_string()
    }

    /// Parses a date in the configured pattern.
    pub fn parse(&self, value: &str) -> ParcResult<NaiveDate> {
        NaiveDate::parse_from_str(value, &self.pattern).map_err(|_| {
            ParcError::Validation(format!(
                "Invalid date '{}', expected pattern {}",
                value, self.pattern
            ))
        })
    }

    /// Parses an optional date string; `None` and empty strings map to
    /// `None`.
    pub fn parse_opt(&self, value: Option<&str>) -> ParcResult<Option<NaiveDate>> {
        match value {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => Ok(Some(self.parse(s)?)),
        }
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::new("%Y-%m-%d")
    }
}

/// Maps computers between the domain model and wire DTOs.
#[derive(Debug, Clone, Default)]
pub struct ComputerMapper {
    format: DateFormat,
}

impl ComputerMapper {
    /// Creates a mapper with the given date format.
    #[must_use]
    pub fn new(format: DateFormat) -> Self {
        Self { format }
    }

    /// Returns the date format in use.
    #[must_use]
    pub fn date_format(&self) -> &DateFormat {
        &self.format
    }

    /// Renders a domain computer as a DTO.
    #[must_use]
    pub fn to_dto(&self, computer: Computer) -> ComputerDto {
        let (company_id, company_name) = match computer.company {
            Some(company) => (Some(company.id.into_inner()), Some(company.name)),
            None => (None, None),
        };

        ComputerDto {
            id: computer.id.into_inner(),
            name: computer.name,
            introduced: computer.introduced.map(|d| self.format.format(d)),
            discontinued: computer.discontinued.map(|d| self.format.format(d)),
            company_id,
            company_name,
        }
    }

    /// Renders a page of computers as a list response.
    #[must_use]
    pub fn to_list_response(&self, page: Page<Computer>) -> ComputerListResponse {
        let info = page.info;
        ComputerListResponse {
            computers: page
                .content
                .into_iter()
                .map(|c| self.to_dto(c))
                .collect(),
            page: info.page,
            size: info.size,
            total_elements: info.total_elements,
            total_pages: info.total_pages,
        }
    }

    /// Builds a domain draft from a create request.
    pub fn to_draft(&self, request: &CreateComputerRequest) -> ParcResult<NewComputer> {
        Ok(NewComputer {
            name: request.name.trim().to_string(),
            introduced: self.format.parse_opt(request.introduced.as_deref())?,
            discontinued: self.format.parse_opt(request.discontinued.as_deref())?,
            company_id: request.company_id.map(CompanyId::new),
        })
    }

    /// Builds a domain draft from an update request.
    pub fn to_update_draft(&self, request: &UpdateComputerRequest) -> ParcResult<NewComputer> {
        Ok(NewComputer {
            name: request.name.trim().to_string(),
            introduced: self.format.parse_opt(request.introduced.as_deref())?,
            discontinued: self.format.parse_opt(request.discontinued.as_deref())?,
            company_id: request.company_id.map(CompanyId::new),
        })
    }
}
