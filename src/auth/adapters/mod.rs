//! Adapter implementations of the auth ports.

pub mod memory;
pub mod postgres;
pub mod sha256;

pub use sha256::Sha256PasswordHasher;
