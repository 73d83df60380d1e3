//! # Parc Repository
//!
//! Data access for the Parc inventory:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn ComputerRepository> / CompanyRepository / UserRepository
//! MySql*Repository                 (SQLx / MySQL)
//!   ↓
//! MySQL
//! ```
//!
//! Paged computer queries run a filtered SELECT over the
//! `computer LEFT JOIN company` projection plus a separate COUNT over the
//! same predicate; the WHERE fragment is always parameterized (see
//! [`filter`]). Company deletion is a two-statement transaction that also
//! removes the owned computers.

pub mod filter;
pub mod mysql;
pub mod pool;
pub mod traits;

pub use filter::{filter_clause, FilterClause};
pub use mysql::{MySqlCompanyRepository, MySqlComputerRepository, MySqlUserRepository};
pub use pool::{create_pool, DatabasePool, StoreTransaction};
pub use traits::{CompanyRepository, ComputerRepository, UserRepository};
