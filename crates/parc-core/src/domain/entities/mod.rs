//! Domain entities.

pub mod company;
pub mod computer;
pub mod user;

pub use company::Company;
pub use computer::{CompanyRef, Computer, NewComputer};
pub use user::{User, UserRole};
