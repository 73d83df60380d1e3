//! MySQL repository implementations.

pub mod company_repository;
pub mod computer_repository;
pub mod user_repository;

pub use company_repository::MySqlCompanyRepository;
pub use computer_repository::MySqlComputerRepository;
pub use user_repository::MySqlUserRepository;

use parc_core::ParcError;
use tracing::error;

/// Maps a store error to [`ParcError`] after logging it with the failing
/// operation's name.
pub(crate) fn store_err(op: &'static str) -> impl FnOnce(sqlx::Error) -> ParcError {
    move |e| {
        error!("repository operation {} failed: {}", op, e);
        ParcError::from(e)
    }
}
