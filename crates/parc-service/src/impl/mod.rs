//! Service implementations.

pub mod company_service_impl;
pub mod computer_service_impl;
pub mod user_service_impl;

#[cfg(test)]
pub(crate) mod test_support;

pub use company_service_impl::CompanyServiceImpl;
pub use computer_service_impl::ComputerServiceImpl;
pub use user_service_impl::UserServiceImpl;
