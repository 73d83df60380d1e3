//! # Parc Config
//!
//! Layered configuration for the Parc inventory service: TOML files plus
//! `PARC_`-prefixed environment variables.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::ConfigLoader;
