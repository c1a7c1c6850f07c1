//! `PostgreSQL` repository implementation for user storage.

use super::{models::NewUserRow, schema::users};
use crate::auth::{
    domain::{NewUser, PasswordDigest, PasswordSalt, UserId, Username},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};
use crate::db::PgPool;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed user repository.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> UserRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> UserRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(UserRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(UserRepositoryError::persistence)?
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: &NewUser) -> UserRepositoryResult<UserId> {
        let username = user.username().clone();
        let new_row = NewUserRow {
            username: username.as_str().to_owned(),
            password_salt: user.salt().as_str().to_owned(),
            password_hash: user.digest().as_str().to_owned(),
        };

        self.run_blocking(move |connection| {
            diesel::insert_into(users::table)
                .values(&new_row)
                .returning(users::id)
                .get_result::<i64>(connection)
                .map(UserId::new)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        UserRepositoryError::DuplicateUsername(username.clone())
                    }
                    _ => UserRepositoryError::persistence(err),
                })
        })
        .await
    }

    async fn find_salt(&self, username: &Username) -> UserRepositoryResult<Option<PasswordSalt>> {
        let lookup = username.as_str().to_owned();
        self.run_blocking(move |connection| {
            let salt = users::table
                .filter(users::username.eq(lookup))
                .select(users::password_salt)
                .first::<String>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            Ok(salt.map(PasswordSalt::from_persisted))
        })
        .await
    }

    async fn find_id_by_credentials(
        &self,
        username: &Username,
        digest: &PasswordDigest,
    ) -> UserRepositoryResult<Option<UserId>> {
        let lookup = username.as_str().to_owned();
        let expected = digest.as_str().to_owned();
        self.run_blocking(move |connection| {
            let id = users::table
                .filter(users::username.eq(lookup))
                .filter(users::password_hash.eq(expected))
                .select(users::id)
                .first::<i64>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            Ok(id.map(UserId::new))
        })
        .await
    }
}
