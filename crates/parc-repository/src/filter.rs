//! Parameterized WHERE-clause construction for computer page filters.
//!
//! Caller-supplied text is never interpolated into the SQL; every
//! condition value travels as a bind parameter.

use parc_core::PageFilter;

/// A WHERE fragment with its bind values.
///
/// `sql` is either empty or starts with `" WHERE "`; `binds` carries one
/// `%value%` pattern per placeholder, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterClause {
    /// SQL fragment with `?` placeholders.
    pub sql: String,
    /// Bind values, one per placeholder.
    pub binds: Vec<String>,
}

impl FilterClause {
    /// An empty clause: no conditions, no binds.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            sql: String::new(),
            binds: Vec::new(),
        }
    }
}

/// Builds the WHERE fragment for a page filter.
///
/// One condition yields a single predicate; two conditions are joined by
/// the filter's operator (`OR` when unspecified). No conditions yield an
/// empty fragment.
#[must_use]
pub fn filter_clause(filter: &PageFilter) -> FilterClause {
    let mut predicates: Vec<&'static str> = Vec::with_capacity(2);
    let mut binds: Vec<String> = Vec::with_capacity(2);

    if let Some(name) = filter.name_contains.as_deref() {
        predicates.push("computer.name LIKE ?");
        binds.push(format!("%{}%", name));
    }
    if let Some(company) = filter.company_contains.as_deref() {
        predicates.push("company.name LIKE ?");
        binds.push(format!("%{}%", company));
    }

    if predicates.is_empty() {
        return FilterClause::empty();
    }

    let joiner = format!(" {} ", filter.operator.as_sql());
    FilterClause {
        sql: format!(" WHERE {}", predicates.join(&joiner)),
        binds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parc_core::{FilterOperator, PageRequest};

    fn base() -> PageFilter {
        PageFilter::unfiltered(PageRequest::first())
    }

    #[test]
    fn test_empty_filter_yields_empty_clause() {
        let clause = filter_clause(&base());
        assert_eq!(clause, FilterClause::empty());
    }

    #[test]
    fn test_name_only() {
        let clause = filter_clause(&base().name_contains("mac"));
        assert_eq!(clause.sql, " WHERE computer.name LIKE ?");
        assert_eq!(clause.binds, vec!["%mac%".to_string()]);
    }

    #[test]
    fn test_company_only() {
        let clause = filter_clause(&base().company_contains("apple"));
        assert_eq!(clause.sql, " WHERE company.name LIKE ?");
        assert_eq!(clause.binds, vec!["%apple%".to_string()]);
    }

    #[test]
    fn test_both_conditions_default_or() {
        let clause = filter_clause(&base().name_contains("mac").company_contains("apple"));
        assert_eq!(
            clause.sql,
            " WHERE computer.name LIKE ? OR company.name LIKE ?"
        );
        assert_eq!(clause.binds, vec!["%mac%".to_string(), "%apple%".to_string()]);
    }

    #[test]
    fn test_both_conditions_and() {
        let clause = filter_clause(
            &base()
                .name_contains("mac")
                .company_contains("apple")
                .operator(FilterOperator::And),
        );
        assert_eq!(
            clause.sql,
            " WHERE computer.name LIKE ? AND company.name LIKE ?"
        );
        assert_eq!(clause.binds.len(), 2);
    }

    #[test]
    fn test_no_interpolation_of_user_input() {
        // A hostile value stays a bind; the fragment never contains it.
        let clause = filter_clause(&base().name_contains("'; DROP TABLE computer; --"));
        assert!(!clause.sql.contains("DROP TABLE"));
        assert_eq!(clause.binds, vec!["%'; DROP TABLE computer; --%".to_string()]);
    }

    #[test]
    fn test_bind_count_matches_placeholder_count() {
        for filter in [
            base(),
            base().name_contains("a"),
            base().company_contains("b"),
            base().name_contains("a").company_contains("b"),
        ] {
            let clause = filter_clause(&filter);
            let placeholders = clause.sql.matches('?').count();
            assert_eq!(placeholders, clause.binds.len());
        }
    }
}
