//! REST API controllers.

pub mod auth_controller;
pub mod company_controller;
pub mod computer_controller;
pub mod health_controller;

pub use health_controller::*;
