//! Repository port for user registration and credential lookup.

use crate::auth::domain::{NewUser, PasswordDigest, PasswordSalt, UserId, Username};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// User persistence contract.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user and returns its store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::DuplicateUsername`] when the username
    /// is already registered.
    async fn create(&self, user: &NewUser) -> UserRepositoryResult<UserId>;

    /// Returns the salt stored for `username`, or `None` when no such user
    /// exists.
    async fn find_salt(&self, username: &Username) -> UserRepositoryResult<Option<PasswordSalt>>;

    /// Finds the user whose username and digest both match.
    ///
    /// The digest comparison is part of the lookup predicate.
    async fn find_id_by_credentials(
        &self,
        username: &Username,
        digest: &PasswordDigest,
    ) -> UserRepositoryResult<Option<UserId>>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// The username is already registered.
    #[error("duplicate username: {0}")]
    DuplicateUsername(Username),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
