//! Composition of the auth and task services over a single backend.
//!
//! Inbound layers resolve an owner through [`TaskManager::auth`] and pass the
//! resulting [`UserId`](crate::auth::domain::UserId) to
//! [`TaskManager::tasks`]. The façade holds no behaviour of its own.

use crate::auth::{
    adapters::{Sha256PasswordHasher, memory::InMemoryUserRepository, postgres::PostgresUserRepository},
    ports::{PasswordHasher, UserRepository},
    services::AuthService,
};
use crate::db::PgPool;
use crate::task::{
    adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
    ports::TaskRepository,
    services::TaskService,
};
use std::sync::Arc;

/// Auth and task services sharing one persistence backend.
pub struct TaskManager<T, U, H>
where
    T: TaskRepository,
    U: UserRepository,
    H: PasswordHasher,
{
    auth: AuthService<U, H>,
    tasks: TaskService<T>,
}

/// Façade backed by the in-memory stores.
pub type InMemoryTaskManager<H = Sha256PasswordHasher> =
    TaskManager<InMemoryTaskRepository, InMemoryUserRepository, H>;

/// Façade backed by `PostgreSQL`.
pub type PostgresTaskManager<H = Sha256PasswordHasher> =
    TaskManager<PostgresTaskRepository, PostgresUserRepository, H>;

impl<T, U, H> TaskManager<T, U, H>
where
    T: TaskRepository,
    U: UserRepository,
    H: PasswordHasher,
{
    /// Composes already constructed services.
    #[must_use]
    pub const fn new(auth: AuthService<U, H>, tasks: TaskService<T>) -> Self {
        Self { auth, tasks }
    }

    /// Returns the registration and credential service.
    #[must_use]
    pub const fn auth(&self) -> &AuthService<U, H> {
        &self.auth
    }

    /// Returns the owner-scoped task service.
    #[must_use]
    pub const fn tasks(&self) -> &TaskService<T> {
        &self.tasks
    }
}

impl<H: PasswordHasher> TaskManager<InMemoryTaskRepository, InMemoryUserRepository, H> {
    /// Builds a façade over fresh, empty in-memory stores.
    #[must_use]
    pub fn in_memory(hasher: Arc<H>) -> Self {
        Self::new(
            AuthService::new(Arc::new(InMemoryUserRepository::new()), hasher),
            TaskService::new(Arc::new(InMemoryTaskRepository::new())),
        )
    }
}

impl<H: PasswordHasher> TaskManager<PostgresTaskRepository, PostgresUserRepository, H> {
    /// Builds a façade whose stores share `pool`.
    #[must_use]
    pub fn postgres(pool: PgPool, hasher: Arc<H>) -> Self {
        Self::new(
            AuthService::new(Arc::new(PostgresUserRepository::new(pool.clone())), hasher),
            TaskService::new(Arc::new(PostgresTaskRepository::new(pool))),
        )
    }
}
