//! Result type aliases for Parc.

use crate::ParcError;

/// A specialized `Result` type for Parc operations.
pub type ParcResult<T> = Result<T, ParcError>;
