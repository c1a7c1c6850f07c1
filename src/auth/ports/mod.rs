//! Port contracts for user registration and authentication.

pub mod hasher;
pub mod repository;

pub use hasher::PasswordHasher;
pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};
