//! Repository port for owner-scoped task persistence.

use crate::auth::domain::UserId;
use crate::task::domain::{Task, TaskId, TaskMutation, TaskName, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every operation takes the owner identity and must apply it as a predicate
/// of the underlying read or write. A task held by another owner is
/// indistinguishable from a missing one.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and returns its store-assigned identifier.
    ///
    /// The store assigns `created_at` and `updated_at`; `completed_at` starts
    /// unset.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::UnknownOwner`] when the store tracks
    /// users and `owner` does not exist.
    async fn create(
        &self,
        owner: UserId,
        name: &TaskName,
        status: TaskStatus,
    ) -> TaskRepositoryResult<TaskId>;

    /// Returns all tasks of `owner`, oldest first (ties broken by id).
    async fn list(&self, owner: UserId) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier within `owner`'s tasks.
    ///
    /// Returns `None` when no such task belongs to `owner`.
    async fn find_by_id(&self, owner: UserId, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Deletes a task of `owner` and returns the number of removed rows.
    async fn delete(&self, owner: UserId, id: TaskId) -> TaskRepositoryResult<u64>;

    /// Applies `mutation` to a task of `owner` and returns the number of
    /// affected rows.
    async fn update(
        &self,
        owner: UserId,
        id: TaskId,
        mutation: &TaskMutation,
    ) -> TaskRepositoryResult<u64>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The owning user does not exist.
    #[error("unknown task owner: {0}")]
    UnknownOwner(UserId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
