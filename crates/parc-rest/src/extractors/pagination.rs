//! Pagination and filter query extractors.

use parc_core::{FilterOperator, PageFilter, PageRequest};
use serde::Deserialize;

/// Query parameters for pagination.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationQuery {
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub size: Option<usize>,
}

impl From<PaginationQuery> for PageRequest {
    fn from(query: PaginationQuery) -> Self {
        PageRequest::new(
            query.page.unwrap_or(1),
            query.size.unwrap_or(PageRequest::DEFAULT_SIZE),
        )
    }
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: Some(1),
            size: Some(PageRequest::DEFAULT_SIZE),
        }
    }
}

/// Query parameters for the filtered computer listing.
///
/// `search` matches the computer name, `company` the company name, and
/// `operator` joins them (`AND`/`OR`, defaulting to `OR`). Blank values
/// count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComputerFilterQuery {
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub size: Option<usize>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub operator: Option<String>,
}

impl From<ComputerFilterQuery> for PageFilter {
    fn from(query: ComputerFilterQuery) -> Self {
        let page = PageRequest::new(
            query.page.unwrap_or(1),
            query.size.unwrap_or(PageRequest::DEFAULT_SIZE),
        );

        let non_blank = |value: Option<String>| {
            value.and_then(|s| {
                let trimmed = s.trim().to_string();
                (!trimmed.is_empty()).then_some(trimmed)
            })
        };

        let operator = query
            .operator
            .as_deref()
            .and_then(|s| s.parse::<FilterOperator>().ok())
            .unwrap_or_default();

        Self {
            page,
            name_contains: non_blank(query.search),
            company_contains: non_blank(query.company),
            operator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let query = PaginationQuery {
            page: None,
            size: None,
        };
        let page = PageRequest::from(query);
        assert_eq!(page.page, 1);
        assert_eq!(page.size, PageRequest::DEFAULT_SIZE);
    }

    #[test]
    fn test_pagination_zero_page_clamped() {
        let query = PaginationQuery {
            page: Some(0),
            size: Some(10),
        };
        let page = PageRequest::from(query);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_filter_query_maps_conditions() {
        let query = ComputerFilterQuery {
            page: Some(2),
            size: Some(10),
            search: Some("mac".to_string()),
            company: Some("apple".to_string()),
            operator: Some("and".to_string()),
        };

        let filter = PageFilter::from(query);
        assert_eq!(filter.page.page, 2);
        assert_eq!(filter.name_contains.as_deref(), Some("mac"));
        assert_eq!(filter.company_contains.as_deref(), Some("apple"));
        assert_eq!(filter.operator, FilterOperator::And);
    }

    #[test]
    fn test_filter_query_blank_values_absent() {
        let query = ComputerFilterQuery {
            search: Some("   ".to_string()),
            company: Some(String::new()),
            ..ComputerFilterQuery::default()
        };

        let filter = PageFilter::from(query);
        assert!(filter.is_unfiltered());
        assert_eq!(filter.operator, FilterOperator::Or);
    }

    #[test]
    fn test_filter_query_unknown_operator_defaults_to_or() {
        let query = ComputerFilterQuery {
            operator: Some("xor".to_string()),
            ..ComputerFilterQuery::default()
        };

        let filter = PageFilter::from(query);
        assert_eq!(filter.operator, FilterOperator::Or);
    }
}
