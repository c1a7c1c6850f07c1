//! Shared world state for task management BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use rstest::fixture;
use taskkeeper::{
    app::InMemoryTaskManager,
    auth::{adapters::Sha256PasswordHasher, domain::UserId, services::AuthServiceError},
    task::{
        domain::{Task, TaskId},
        services::TaskServiceError,
    },
};

/// Scenario world for task management behaviour tests.
pub struct TaskManagementWorld {
    pub manager: InMemoryTaskManager,
    pub users: HashMap<String, UserId>,
    pub last_task: Option<TaskId>,
    pub last_resolution: Option<Result<UserId, AuthServiceError>>,
    pub last_update: Option<Result<(), TaskServiceError>>,
    pub listed: Vec<Task>,
}

impl TaskManagementWorld {
    /// Creates a world over fresh in-memory stores.
    #[must_use]
    pub fn new() -> Self {
        Self {
            manager: InMemoryTaskManager::in_memory(Arc::new(Sha256PasswordHasher::new(
                "scenario-secret",
                2,
            ))),
            users: HashMap::new(),
            last_task: None,
            last_resolution: None,
            last_update: None,
            listed: Vec::new(),
        }
    }

    /// Returns the identity registered for `username`.
    pub fn user(&self, username: &str) -> Result<UserId, eyre::Report> {
        self.users
            .get(username)
            .copied()
            .ok_or_else(|| eyre::eyre!("user {username} was not registered in this scenario"))
    }

    /// Returns the most recently created task.
    pub fn task(&self) -> Result<TaskId, eyre::Report> {
        self.last_task
            .ok_or_else(|| eyre::eyre!("no task was created in this scenario"))
    }
}

impl Default for TaskManagementWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskManagementWorld {
    TaskManagementWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
