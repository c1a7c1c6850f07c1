//! Registration and username/password resolution.

use crate::auth::{
    domain::{NewUser, Password, PasswordSalt, UserDomainError, UserId, Username},
    ports::{PasswordHasher, UserRepository, UserRepositoryError},
};
use crate::error::ErrorKind;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for authentication operations.
#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// Registration input failed validation.
    #[error(transparent)]
    Validation(#[from] UserDomainError),

    /// No user matches the supplied username and password.
    #[error("no user matches the supplied credentials")]
    NotFound,

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

impl AuthServiceError {
    /// Classifies the error for transport mapping.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound => ErrorKind::NotFound,
            Self::Repository(_) => ErrorKind::Store,
        }
    }
}

/// Result type for authentication service operations.
pub type AuthServiceResult<T> = Result<T, AuthServiceError>;

/// Registers users and resolves credentials to user identities.
#[derive(Clone)]
pub struct AuthService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R, H> AuthService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    /// Creates a new authentication service.
    #[must_use]
    pub const fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Registers `username` with a freshly salted digest of `password`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::Validation`] for a blank username or empty
    /// password, and [`AuthServiceError::Repository`] when the store rejects
    /// the user, e.g. [`UserRepositoryError::DuplicateUsername`].
    pub async fn register(&self, username: &str, password: &str) -> AuthServiceResult<UserId> {
        let name = Username::new(username)?;
        let secret = Password::new(password)?;
        let salt = PasswordSalt::generate();
        let digest = self.hasher.hash(&secret, &salt);

        let id = self
            .repository
            .create(&NewUser::new(name.clone(), salt, digest))
            .await?;
        tracing::info!(username = %name, user = %id, "user registered");
        Ok(id)
    }

    /// Resolves a username/password pair to the matching user identity.
    ///
    /// Malformed input, an unknown username and a wrong password are all
    /// reported as [`AuthServiceError::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::NotFound`] when no user matches, or
    /// [`AuthServiceError::Repository`] when the lookup fails.
    pub async fn resolve(&self, username: &str, password: &str) -> AuthServiceResult<UserId> {
        let (Ok(name), Ok(secret)) = (Username::new(username), Password::new(password)) else {
            tracing::debug!("rejecting malformed credentials");
            return Err(AuthServiceError::NotFound);
        };

        let Some(salt) = self.repository.find_salt(&name).await? else {
            tracing::debug!(username = %name, "unknown username");
            return Err(AuthServiceError::NotFound);
        };
        let digest = self.hasher.hash(&secret, &salt);

        self.repository
            .find_id_by_credentials(&name, &digest)
            .await?
            .ok_or(AuthServiceError::NotFound)
    }
}
