//! Company entity.

use crate::{CompanyId, Entity};
use serde::{Deserialize, Serialize};

/// A company record. Referenced by zero or more computers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier, database-assigned.
    pub id: CompanyId,
    /// Company name; required.
    pub name: String,
}

impl Company {
    /// Creates a company with an assigned identifier.
    #[must_use]
    pub fn new(id: CompanyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Entity<CompanyId> for Company {
    fn id(&self) -> &CompanyId {
        &self.id
    }
}
