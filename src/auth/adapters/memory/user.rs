//! In-memory user repository for tests and local runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::auth::{
    domain::{NewUser, PasswordDigest, PasswordSalt, UserId, Username},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<InMemoryUserState>>,
}

#[derive(Debug, Default)]
struct InMemoryUserState {
    users: HashMap<Username, StoredUser>,
    last_id: i64,
}

#[derive(Debug)]
struct StoredUser {
    id: UserId,
    salt: PasswordSalt,
    digest: PasswordDigest,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> UserRepositoryError {
    UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &NewUser) -> UserRepositoryResult<UserId> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.users.contains_key(user.username()) {
            return Err(UserRepositoryError::DuplicateUsername(
                user.username().clone(),
            ));
        }

        state.last_id += 1;
        let id = UserId::new(state.last_id);
        state.users.insert(
            user.username().clone(),
            StoredUser {
                id,
                salt: user.salt().clone(),
                digest: user.digest().clone(),
            },
        );
        Ok(id)
    }

    async fn find_salt(&self, username: &Username) -> UserRepositoryResult<Option<PasswordSalt>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.users.get(username).map(|user| user.salt.clone()))
    }

    async fn find_id_by_credentials(
        &self,
        username: &Username,
        digest: &PasswordDigest,
    ) -> UserRepositoryResult<Option<UserId>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .users
            .get(username)
            .filter(|user| &user.digest == digest)
            .map(|user| user.id))
    }
}
