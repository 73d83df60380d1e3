//! # Parc Security
//!
//! Password hashing primitives. Token and session mechanics live outside
//! this service; the only security capability carried here is credential
//! hashing and verification.

pub mod password;

pub use password::PasswordHasher;
