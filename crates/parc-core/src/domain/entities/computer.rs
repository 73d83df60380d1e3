//! Computer entity.

use crate::{CompanyId, ComputerId, Entity};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Denormalized reference to the owning company carried on a computer.
///
/// Populated from the LEFT JOIN against `company`; absent entirely when
/// the computer has no owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRef {
    /// Company identifier.
    pub id: CompanyId,
    /// Company name at read time.
    pub name: String,
}

impl CompanyRef {
    /// Creates a new company reference.
    #[must_use]
    pub fn new(id: CompanyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A computer record.
///
/// The identifier is assigned by the database on create. The
/// introduced/discontinued ordering is deliberately not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Computer {
    /// Unique identifier, database-assigned.
    pub id: ComputerId,
    /// Computer name; required, non-blank.
    pub name: String,
    /// Date the computer was introduced, if known.
    pub introduced: Option<NaiveDate>,
    /// Date the computer was discontinued, if known.
    pub discontinued: Option<NaiveDate>,
    /// Owning company, if any.
    pub company: Option<CompanyRef>,
}

impl Computer {
    /// Creates a computer with an assigned identifier.
    #[must_use]
    pub fn new(id: ComputerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            introduced: None,
            discontinued: None,
            company: None,
        }
    }

    /// Returns the owning company id, if any.
    #[must_use]
    pub fn company_id(&self) -> Option<CompanyId> {
        self.company.as_ref().map(|c| c.id)
    }

    /// Returns the draft corresponding to this record, for update calls.
    #[must_use]
    pub fn to_draft(&self) -> NewComputer {
        NewComputer {
            name: self.name.clone(),
            introduced: self.introduced,
            discontinued: self.discontinued,
            company_id: self.company_id(),
        }
    }
}

impl Entity<ComputerId> for Computer {
    fn id(&self) -> &ComputerId {
        &self.id
    }
}

/// Draft of a computer, used for create and update calls before the
/// database has assigned (or re-read) the row.
///
/// The name is required at the type level; everything else is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComputer {
    /// Computer name; required, non-blank.
    pub name: String,
    /// Date the computer was introduced.
    pub introduced: Option<NaiveDate>,
    /// Date the computer was discontinued.
    pub discontinued: Option<NaiveDate>,
    /// Owning company id.
    pub company_id: Option<CompanyId>,
}

impl NewComputer {
    /// Creates a draft with the required name and no optional fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the introduced date.
    #[must_use]
    pub fn introduced(mut self, date: NaiveDate) -> Self {
        self.introduced = Some(date);
        self
    }

    /// Sets the discontinued date.
    #[must_use]
    pub fn discontinued(mut self, date: NaiveDate) -> Self {
        self.discontinued = Some(date);
        self
    }

    /// Sets the owning company.
    #[must_use]
    pub fn company(mut self, id: CompanyId) -> Self {
        self.company_id = Some(id);
        self
    }
}
